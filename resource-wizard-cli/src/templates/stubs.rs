//! Built-in stub contents
//!
//! Stubs use the `Dummy*` placeholders and the shared-resource markers
//! understood by `resource_wizard::template`.

/// `Database/create-migration.php`
pub const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

class CreateDummyStudlyPTable extends Migration
{
    /**
     * Create the DummyTextP table.
     */
    public function up(): void
    {
        Schema::create('DummySnakeP', function (Blueprint $table) {
            $table->id();
            // SharedRemoveStart
            $table->string('service_account_id')->index();
            // SharedRemoveEnd
            $table->string('name');
            $table->foreignId('created_by')->nullable();
            $table->foreignId('modified_by')->nullable();
            $table->foreignId('locked_by')->nullable();
            $table->timestamp('locked_at')->nullable();
            $table->timestamps();
            $table->softDeletes();
        });
    }

    /**
     * Drop the DummyTextP table.
     */
    public function down(): void
    {
        Schema::dropIfExists('DummySnakeP');
    }
}
"#;

/// `Database/Model.php`
pub const MODEL: &str = r#"<?php

namespace App\Models\ResourceWizard;

use App\Models\User;
use Illuminate\Database\Eloquent\Builder;
use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;
use Illuminate\Database\Eloquent\Relations\BelongsTo;
use Illuminate\Database\Eloquent\SoftDeletes;
use ResourceWizard\Models\ResourceModel;

class DummyStudlyS extends Model implements ResourceModel
{
    use HasFactory, SoftDeletes;

    protected $table = 'DummySnakeP';

    protected $fillable = ['name'];

    protected $casts = ['locked_at' => 'datetime'];

    public static function getBrowseRelations(): array
    {
        return ['lockedByUser'];
    }

    public static function getReadRelations(): array
    {
        return ['createdByUser', 'modifiedByUser', 'lockedByUser'];
    }

    public static function getSearchableColumns(): array
    {
        return ['name'];
    }

    public function getTableName(): string
    {
        return $this->getTable();
    }

    public function scopeVisible(Builder $query): Builder
    {
        return $query
            ->where($this->getTableName() . ".service_account_id", $this->getAccountID());
    }
    // SharedRemoveStart

    public function getAccountID(): string
    {
        return (string) request()->route('account');
    }
    // SharedRemoveEnd

    public function createdByUser(): BelongsTo
    {
        return $this->belongsTo(User::class, 'created_by');
    }

    public function modifiedByUser(): BelongsTo
    {
        return $this->belongsTo(User::class, 'modified_by');
    }

    public function lockedByUser(): BelongsTo
    {
        return $this->belongsTo(User::class, 'locked_by');
    }
}
"#;

/// `Database/Factory.php`
pub const FACTORY: &str = r#"<?php

namespace Database\Factories\ResourceWizard;

use App\Models\ResourceWizard\DummyStudlyS;
use Illuminate\Database\Eloquent\Factories\Factory;

/**
 * @extends Factory<DummyStudlyS>
 */
class DummyStudlySFactory extends Factory
{
    protected $model = DummyStudlyS::class;

    public function definition(): array
    {
        return [
            'name' => $this->faker->words(3, true),
        ];
    }
}
"#;

/// `Requests/Request.php`
pub const REQUEST: &str = r#"<?php

namespace App\Http\Requests\ResourceWizard;

use ResourceWizard\Requests\FormRequest;

class DummyStudlySRequest extends FormRequest
{
    protected function getStoreRules(): array
    {
        return [
            'name' => ['required', 'string', 'max:255'],
        ];
    }

    protected function getUpdateRules(): array
    {
        return [
            'name' => ['sometimes', 'string', 'max:255'],
        ];
    }
}
"#;

/// `Events/Browse.php`
pub const EVENT_BROWSE: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use ResourceWizard\Events\EventBrowse;

class DummyStudlyPBrowse extends EventBrowse
{
    public function __construct(string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $account, $requester);
    }
}
"#;

/// `Events/Read.php`
pub const EVENT_READ: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventRead;

class DummyStudlySRead extends EventRead
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Events/Edit.php`
pub const EVENT_EDIT: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventEdit;

class DummyStudlySEdit extends EventEdit
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Events/Add.php`
pub const EVENT_ADD: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventAdd;

class DummyStudlySAdd extends EventAdd
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Events/Delete.php`
pub const EVENT_DELETE: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventDelete;

class DummyStudlySDelete extends EventDelete
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Events/Lock.php`
pub const EVENT_LOCK: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventLock;

class DummyStudlySLock extends EventLock
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Events/Unlock.php`
pub const EVENT_UNLOCK: &str = r#"<?php

namespace App\Events\ResourceWizard\DummyStudlyP;

use App\Models\ResourceWizard\DummyStudlyS;
use ResourceWizard\Events\EventUnlock;

class DummyStudlySUnlock extends EventUnlock
{
    public function __construct(DummyStudlyS $DummyCamelS, string $account, array $requester)
    {
        parent::__construct('DummyKebabS', $DummyCamelS, $account, $requester);
    }
}
"#;

/// `Http/Controller.php`
pub const CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers\ResourceWizard;

use App\Http\Requests\ResourceWizard\DummyStudlySRequest;
use App\Models\ResourceWizard\DummyStudlyS;
use Illuminate\Http\JsonResponse;
use ResourceWizard\Http\ResourceController;

class DummyStudlyPController extends ResourceController
{
    public function __construct()
    {
        parent::__construct(false); // Controller Shared
    }

    public function index(): JsonResponse
    {
        return $this->browse(DummyStudlyS::query()->visible());
    }

    public function store(DummyStudlySRequest $request): JsonResponse
    {
        return $this->add(DummyStudlyS::create($request->validated()));
    }

    public function show(DummyStudlyS $DummyCamelS): JsonResponse
    {
        return $this->read($DummyCamelS);
    }

    public function update(DummyStudlySRequest $request, DummyStudlyS $DummyCamelS): JsonResponse
    {
        $DummyCamelS->update($request->validated());

        return $this->edit($DummyCamelS);
    }

    public function destroy(DummyStudlyS $DummyCamelS): JsonResponse
    {
        return $this->delete($DummyCamelS);
    }
}
"#;

/// `Js/page.vue`
pub const PAGE: &str = r##"<template>
  <resource-page
    title="DummyTitleP"
    resource="DummyKebabS"
    :module="module"
    :channel="channel"
  />
</template>

<script>
import module from '@/modules/resources/DummySnakeP'

export default {
  name: 'DummyStudlyP',
  data () {
    return {
      module,
      channel: {
        domain_channel: window.Laravel.subdomain, // Account dependent
        resource: 'DummyKebabS'
      }
    }
  }
}
</script>
"##;

/// `Js/browse.vue`
pub const BREAD_BROWSE: &str = r##"<template>
  <resource-browse :items="DummyCamelP" resource="DummyKebabS" @select="read" />
</template>

<script>
import { mapState } from 'vuex'

export default {
  name: 'DummyStudlyPBrowse',
  computed: mapState('DummySnakeP', ['DummyCamelP']),
  methods: {
    read (id) {
      this.$emit('read', id)
    }
  }
}
</script>
"##;

/// `Js/read.vue`
pub const BREAD_READ: &str = r##"<template>
  <resource-read :item="DummyCamelS" title="DummyTitleS" />
</template>

<script>
export default {
  name: 'DummyStudlyPRead',
  props: {
    DummyCamelS: { type: Object, required: true }
  }
}
</script>
"##;

/// `Js/edit.vue`
pub const BREAD_EDIT: &str = r##"<template>
  <resource-form :item="DummyCamelS" title="Edit DummyTextS" @submit="save" />
</template>

<script>
export default {
  name: 'DummyStudlyPEdit',
  props: {
    DummyCamelS: { type: Object, required: true }
  },
  methods: {
    save (values) {
      return this.$store.dispatch('DummySnakeP/edit', { id: this.DummyCamelS.id, values })
    }
  }
}
</script>
"##;

/// `Js/add.vue`
pub const BREAD_ADD: &str = r##"<template>
  <resource-form title="New DummyTextS" @submit="save" />
</template>

<script>
export default {
  name: 'DummyStudlyPAdd',
  methods: {
    save (values) {
      return this.$store.dispatch('DummySnakeP/add', values)
    }
  }
}
</script>
"##;

/// `Js/delete.vue`
pub const BREAD_DELETE: &str = r##"<template>
  <resource-confirm :message="`Delete this DummyTextS?`" @confirm="remove" />
</template>

<script>
export default {
  name: 'DummyStudlyPDelete',
  props: {
    DummyCamelS: { type: Object, required: true }
  },
  methods: {
    remove () {
      return this.$store.dispatch('DummySnakeP/delete', this.DummyCamelS.id)
    }
  }
}
</script>
"##;

/// `Js/item.js`
pub const ITEM: &str = r##"import Item from '@/resources/Item'

export default class DummyStudlyS extends Item {
  static resource = 'DummyKebabS'

  static endpoint = '/DummySlugP'

  get label () {
    return this.name
  }
}
"##;

/// `Js/module.js`
pub const MODULE: &str = r##"import resourceModule from '@/modules/resourceModule'
import DummyStudlyS from '@/components/resources/DummyStudlyP/DummyStudlyP'

export default resourceModule({
  name: 'DummySnakeP',
  item: DummyStudlyS,
  // SharedRemoveStart
  account: () => window.Laravel.subdomain,
  // SharedRemoveEnd
  channel: {
    domain_channel: window.Laravel.subdomain, // Account dependent
    resource: 'DummyKebabS'
  }
})
"##;

/// `Js/dps_page.js`
pub const DPS_PAGE: &str = r##"export default {
  title: 'DummyTitleP',
  route: '/DummySlugP',
  component: () => import('@/pages/DummyStudlyP.vue'),
  channel: {
    domain_channel: window.Laravel.subdomain // Account dependent
  }
}
"##;

/// `resource.php`
pub const RESOURCE: &str = r#"<?php

return [
    'name' => 'DummyTitleS',
    'plural' => 'DummyTitleP',
    'slug' => 'DummySlugS',
    'table' => 'DummySnakeP',
    'model' => App\Models\ResourceWizard\DummyStudlyS::class,
    'request' => App\Http\Requests\ResourceWizard\DummyStudlySRequest::class,
    'events' => 'App\Events\ResourceWizard\DummyStudlyP',
    'shared' => false,
];
"#;

/// Every built-in stub, keyed by stub name
pub const STUBS: &[(&str, &str)] = &[
    ("Database/create-migration.php", MIGRATION),
    ("Database/Model.php", MODEL),
    ("Database/Factory.php", FACTORY),
    ("Requests/Request.php", REQUEST),
    ("Events/Browse.php", EVENT_BROWSE),
    ("Events/Read.php", EVENT_READ),
    ("Events/Edit.php", EVENT_EDIT),
    ("Events/Add.php", EVENT_ADD),
    ("Events/Delete.php", EVENT_DELETE),
    ("Events/Lock.php", EVENT_LOCK),
    ("Events/Unlock.php", EVENT_UNLOCK),
    ("Http/Controller.php", CONTROLLER),
    ("Js/page.vue", PAGE),
    ("Js/browse.vue", BREAD_BROWSE),
    ("Js/read.vue", BREAD_READ),
    ("Js/edit.vue", BREAD_EDIT),
    ("Js/add.vue", BREAD_ADD),
    ("Js/delete.vue", BREAD_DELETE),
    ("Js/item.js", ITEM),
    ("Js/module.js", MODULE),
    ("Js/dps_page.js", DPS_PAGE),
    ("resource.php", RESOURCE),
];
