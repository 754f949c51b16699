// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The messages used by the Deployment Manager API.

use gax::declare_message;
use gax::model::{Field, FieldType, Schema};

static ACCESS_CONFIG: Schema = Schema::new(
    "AccessConfig",
    &[
        Field::string("name"),
        Field::string("natIp"),
        Field::string("type"),
    ],
);

declare_message! {
    /// A Compute Engine network access config.
    pub struct AccessConfig => ACCESS_CONFIG;
}

static ACTION: Schema = Schema::new(
    "Action",
    &[
        Field::array("commands", FieldType::String),
        Field::integer("timeoutMs"),
    ],
)
.with_collection_key("commands");

declare_message! {
    /// An action that can be performed in a [Template].
    pub struct Action => ACTION;
}

static ALLOWED_RULE: Schema = Schema::new(
    "AllowedRule",
    &[
        Field::string("iPProtocol"),
        Field::array("ports", FieldType::String),
    ],
)
.with_collection_key("ports")
.with_wire_names(&[("iPProtocol", "IPProtocol")]);

declare_message! {
    /// A firewall rule.
    ///
    /// The protocol travels as `IPProtocol` on the wire.
    pub struct AllowedRule => ALLOWED_RULE;
}

static AUTOSCALING_MODULE: Schema = Schema::new(
    "AutoscalingModule",
    &[
        Field::integer("coolDownPeriodSec"),
        Field::string("description"),
        Field::integer("maxNumReplicas"),
        Field::integer("minNumReplicas"),
        Field::string("signalType"),
        Field::string("targetModule"),
        Field::number("targetUtilization"),
    ],
);

declare_message! {
    pub struct AutoscalingModule => AUTOSCALING_MODULE;
}

static AUTOSCALING_MODULE_STATUS: Schema = Schema::new(
    "AutoscalingModuleStatus",
    &[
        Field::string("autoscalingConfigUrl"),
    ],
);

declare_message! {
    pub struct AutoscalingModuleStatus => AUTOSCALING_MODULE_STATUS;
}

static DEPLOY_STATE: Schema = Schema::new(
    "DeployState",
    &[
        Field::string("details"),
        Field::string("status"),
    ],
);

declare_message! {
    /// The state of a deployment or of one of its modules.
    pub struct DeployState => DEPLOY_STATE;
}

static DEPLOYMENT: Schema = Schema::new(
    "Deployment",
    &[
        Field::string("creationDate"),
        Field::string("description"),
        Field::map("modules", FieldType::Object(&MODULE_STATUS)),
        Field::string("name"),
        Field::array("overrides", FieldType::Object(&PARAM_OVERRIDE)),
        Field::object("state", &DEPLOY_STATE),
        Field::string("templateName"),
    ],
)
.with_collection_key("overrides");

declare_message! {
    /// A deployment of a [Template].
    pub struct Deployment => DEPLOYMENT;
}

static DEPLOYMENTS_LIST_RESPONSE: Schema = Schema::new(
    "DeploymentsListResponse",
    &[
        Field::string("nextPageToken"),
        Field::array("resources", FieldType::Object(&DEPLOYMENT)),
    ],
)
.with_collection_key("resources");

declare_message! {
    /// A page of [Deployment] values.
    pub struct DeploymentsListResponse => DEPLOYMENTS_LIST_RESPONSE;
}

static DISK_ATTACHMENT: Schema = Schema::new(
    "DiskAttachment",
    &[
        Field::string("deviceName"),
        Field::integer("index"),
    ],
);

declare_message! {
    pub struct DiskAttachment => DISK_ATTACHMENT;
}

static ENV_VARIABLE: Schema = Schema::new(
    "EnvVariable",
    &[
        Field::boolean("hidden"),
        Field::string("value"),
    ],
);

declare_message! {
    pub struct EnvVariable => ENV_VARIABLE;
}

static EXISTING_DISK: Schema = Schema::new(
    "ExistingDisk",
    &[
        Field::object("attachment", &DISK_ATTACHMENT),
        Field::string("source"),
    ],
);

declare_message! {
    /// An existing persistent disk to attach to each replica.
    pub struct ExistingDisk => EXISTING_DISK;
}

static FIREWALL_MODULE: Schema = Schema::new(
    "FirewallModule",
    &[
        Field::array("allowed", FieldType::Object(&ALLOWED_RULE)),
        Field::string("description"),
        Field::string("network"),
        Field::array("sourceRanges", FieldType::String),
        Field::array("sourceTags", FieldType::String),
        Field::array("targetTags", FieldType::String),
    ],
)
.with_collection_key("targetTags");

declare_message! {
    pub struct FirewallModule => FIREWALL_MODULE;
}

static FIREWALL_MODULE_STATUS: Schema = Schema::new(
    "FirewallModuleStatus",
    &[
        Field::string("firewallUrl"),
    ],
);

declare_message! {
    pub struct FirewallModuleStatus => FIREWALL_MODULE_STATUS;
}

static HEALTH_CHECK_MODULE: Schema = Schema::new(
    "HealthCheckModule",
    &[
        Field::integer("checkIntervalSec"),
        Field::string("description"),
        Field::integer("healthyThreshold"),
        Field::string("host"),
        Field::string("path"),
        Field::integer("port"),
        Field::integer("timeoutSec"),
        Field::integer("unhealthyThreshold"),
    ],
);

declare_message! {
    pub struct HealthCheckModule => HEALTH_CHECK_MODULE;
}

static HEALTH_CHECK_MODULE_STATUS: Schema = Schema::new(
    "HealthCheckModuleStatus",
    &[
        Field::string("healthCheckUrl"),
    ],
);

declare_message! {
    pub struct HealthCheckModuleStatus => HEALTH_CHECK_MODULE_STATUS;
}

static LB_MODULE: Schema = Schema::new(
    "LbModule",
    &[
        Field::string("description"),
        Field::array("healthChecks", FieldType::String),
        Field::string("ipAddress"),
        Field::string("ipProtocol"),
        Field::string("portRange"),
        Field::string("sessionAffinity"),
        Field::array("targetModules", FieldType::String),
    ],
)
.with_collection_key("targetModules");

declare_message! {
    /// A load balancer module.
    pub struct LbModule => LB_MODULE;
}

static LB_MODULE_STATUS: Schema = Schema::new(
    "LbModuleStatus",
    &[
        Field::string("forwardingRuleUrl"),
        Field::string("targetPoolUrl"),
    ],
);

declare_message! {
    pub struct LbModuleStatus => LB_MODULE_STATUS;
}

static METADATA: Schema = Schema::new(
    "Metadata",
    &[
        Field::string("fingerPrint"),
        Field::array("items", FieldType::Object(&METADATA_ITEM)),
    ],
)
.with_collection_key("items");

declare_message! {
    /// Compute Engine metadata for the replicas.
    pub struct Metadata => METADATA;
}

static METADATA_ITEM: Schema = Schema::new(
    "MetadataItem",
    &[
        Field::string("key"),
        Field::string("value"),
    ],
);

declare_message! {
    pub struct MetadataItem => METADATA_ITEM;
}

static MODULE: Schema = Schema::new(
    "Module",
    &[
        Field::object("autoscalingModule", &AUTOSCALING_MODULE),
        Field::object("firewallModule", &FIREWALL_MODULE),
        Field::object("healthCheckModule", &HEALTH_CHECK_MODULE),
        Field::object("lbModule", &LB_MODULE),
        Field::object("networkModule", &NETWORK_MODULE),
        Field::object("replicaPoolModule", &REPLICA_POOL_MODULE),
        Field::string("type"),
    ],
);

declare_message! {
    /// One module of a [Template].
    ///
    /// Exactly one of the `*Module` fields is expected to be set, as indicated
    /// by `type`.
    pub struct Module => MODULE;
}

static MODULE_STATUS: Schema = Schema::new(
    "ModuleStatus",
    &[
        Field::object("autoscalingModuleStatus", &AUTOSCALING_MODULE_STATUS),
        Field::object("firewallModuleStatus", &FIREWALL_MODULE_STATUS),
        Field::object("healthCheckModuleStatus", &HEALTH_CHECK_MODULE_STATUS),
        Field::object("lbModuleStatus", &LB_MODULE_STATUS),
        Field::object("networkModuleStatus", &NETWORK_MODULE_STATUS),
        Field::object("replicaPoolModuleStatus", &REPLICA_POOL_MODULE_STATUS),
        Field::object("state", &DEPLOY_STATE),
        Field::string("type"),
    ],
);

declare_message! {
    /// The status of one module of a [Deployment].
    pub struct ModuleStatus => MODULE_STATUS;
}

static NETWORK_INTERFACE: Schema = Schema::new(
    "NetworkInterface",
    &[
        Field::array("accessConfigs", FieldType::Object(&ACCESS_CONFIG)),
        Field::string("name"),
        Field::string("network"),
        Field::string("networkIp"),
    ],
)
.with_collection_key("accessConfigs");

declare_message! {
    pub struct NetworkInterface => NETWORK_INTERFACE;
}

static NETWORK_MODULE: Schema = Schema::new(
    "NetworkModule",
    &[
        Field::string("iPv4Range"),
        Field::string("description"),
        Field::string("gatewayIPv4"),
    ],
)
.with_wire_names(&[("iPv4Range", "IPv4Range")]);

declare_message! {
    /// A network module.
    ///
    /// The range travels as `IPv4Range` on the wire.
    pub struct NetworkModule => NETWORK_MODULE;
}

static NETWORK_MODULE_STATUS: Schema = Schema::new(
    "NetworkModuleStatus",
    &[
        Field::string("networkUrl"),
    ],
);

declare_message! {
    pub struct NetworkModuleStatus => NETWORK_MODULE_STATUS;
}

static NEW_DISK: Schema = Schema::new(
    "NewDisk",
    &[
        Field::object("attachment", &DISK_ATTACHMENT),
        Field::boolean("autoDelete"),
        Field::boolean("boot"),
        Field::object("initializeParams", &NEW_DISK_INITIALIZE_PARAMS),
    ],
);

declare_message! {
    /// A persistent disk created for each replica.
    pub struct NewDisk => NEW_DISK;
}

static NEW_DISK_INITIALIZE_PARAMS: Schema = Schema::new(
    "NewDiskInitializeParams",
    &[
        Field::string("diskSizeGb"),
        Field::string("diskType"),
        Field::string("sourceImage"),
    ],
);

declare_message! {
    pub struct NewDiskInitializeParams => NEW_DISK_INITIALIZE_PARAMS;
}

static PARAM_OVERRIDE: Schema = Schema::new(
    "ParamOverride",
    &[
        Field::string("path"),
        Field::string("value"),
    ],
);

declare_message! {
    /// Overrides a value in the template when creating a deployment.
    pub struct ParamOverride => PARAM_OVERRIDE;
}

static REPLICA_POOL_MODULE: Schema = Schema::new(
    "ReplicaPoolModule",
    &[
        Field::map("envVariables", FieldType::Object(&ENV_VARIABLE)),
        Field::array("healthChecks", FieldType::String),
        Field::integer("numReplicas"),
        Field::object("replicaPoolParams", &REPLICA_POOL_PARAMS),
        Field::string("resourceView"),
    ],
)
.with_collection_key("healthChecks");

declare_message! {
    /// A replica pool module.
    pub struct ReplicaPoolModule => REPLICA_POOL_MODULE;
}

static REPLICA_POOL_MODULE_STATUS: Schema = Schema::new(
    "ReplicaPoolModuleStatus",
    &[
        Field::string("replicaPoolUrl"),
        Field::string("resourceViewUrl"),
    ],
);

declare_message! {
    pub struct ReplicaPoolModuleStatus => REPLICA_POOL_MODULE_STATUS;
}

static REPLICA_POOL_PARAMS: Schema = Schema::new(
    "ReplicaPoolParams",
    &[
        Field::object("v1beta1", &REPLICA_POOL_PARAMS_V1_BETA1),
    ],
);

declare_message! {
    pub struct ReplicaPoolParams => REPLICA_POOL_PARAMS;
}

static REPLICA_POOL_PARAMS_V1_BETA1: Schema = Schema::new(
    "ReplicaPoolParamsV1Beta1",
    &[
        Field::boolean("autoRestart"),
        Field::string("baseInstanceName"),
        Field::boolean("canIpForward"),
        Field::string("description"),
        Field::array("disksToAttach", FieldType::Object(&EXISTING_DISK)),
        Field::array("disksToCreate", FieldType::Object(&NEW_DISK)),
        Field::string("initAction"),
        Field::string("machineType"),
        Field::object("metadata", &METADATA),
        Field::array("networkInterfaces", FieldType::Object(&NETWORK_INTERFACE)),
        Field::string("onHostMaintenance"),
        Field::array("serviceAccounts", FieldType::Object(&SERVICE_ACCOUNT)),
        Field::object("tags", &TAG),
        Field::string("zone"),
    ],
)
.with_collection_key("serviceAccounts");

declare_message! {
    /// The configuration of a replica pool, as used by the v1beta1 Replica Pool API.
    pub struct ReplicaPoolParamsV1Beta1 => REPLICA_POOL_PARAMS_V1_BETA1;
}

static SERVICE_ACCOUNT: Schema = Schema::new(
    "ServiceAccount",
    &[
        Field::string("email"),
        Field::array("scopes", FieldType::String),
    ],
)
.with_collection_key("scopes");

declare_message! {
    pub struct ServiceAccount => SERVICE_ACCOUNT;
}

static TAG: Schema = Schema::new(
    "Tag",
    &[
        Field::string("fingerPrint"),
        Field::array("items", FieldType::String),
    ],
)
.with_collection_key("items");

declare_message! {
    pub struct Tag => TAG;
}

static TEMPLATE: Schema = Schema::new(
    "Template",
    &[
        Field::map("actions", FieldType::Object(&ACTION)),
        Field::string("description"),
        Field::map("modules", FieldType::Object(&MODULE)),
        Field::string("name"),
    ],
);

declare_message! {
    /// A template describing the modules of a deployment.
    pub struct Template => TEMPLATE;
}

static TEMPLATES_LIST_RESPONSE: Schema = Schema::new(
    "TemplatesListResponse",
    &[
        Field::string("nextPageToken"),
        Field::array("resources", FieldType::Object(&TEMPLATE)),
    ],
)
.with_collection_key("resources");

declare_message! {
    /// A page of [Template] values.
    pub struct TemplatesListResponse => TEMPLATES_LIST_RESPONSE;
}
