use std::fmt;

/// Kind of dashboard page a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Worker,
    Observability,
    CronTriggers,
    Queue,
    Workflow,
    BrowserRendering,
    Vpc,
    R2,
    Kv,
    D1,
    Pipeline,
    Vectorize,
    SecretsStore,
    Images,
}

impl ResourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Worker => "worker",
            ResourceType::Observability => "observability",
            ResourceType::CronTriggers => "cron_triggers",
            ResourceType::Queue => "queue",
            ResourceType::Workflow => "workflow",
            ResourceType::BrowserRendering => "browser_rendering",
            ResourceType::Vpc => "vpc",
            ResourceType::R2 => "r2",
            ResourceType::Kv => "kv",
            ResourceType::D1 => "d1",
            ResourceType::Pipeline => "pipeline",
            ResourceType::Vectorize => "vectorize",
            ResourceType::SecretsStore => "secrets_store",
            ResourceType::Images => "images",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One openable dashboard page derived from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub resource_type: ResourceType,
    pub name: String,
    pub id: String,
    pub description: String,
    pub url: String,
}

impl Resource {
    /// Label shown in the selection prompt.
    pub fn display(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}
