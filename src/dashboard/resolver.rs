//! Map a parsed Wrangler configuration to dashboard resources.

use std::collections::HashSet;

use tracing::debug;

use crate::config::WranglerConfig;

use super::{build_dashboard_url, Resource, ResourceType};

/// Accumulates resources in emission order, building each URL on push.
struct ResourceList<'a> {
    account_id: &'a str,
    has_account: bool,
    resources: Vec<Resource>,
}

impl<'a> ResourceList<'a> {
    fn new(account_id: &'a str, has_account: bool) -> Self {
        Self {
            account_id,
            has_account,
            resources: Vec::new(),
        }
    }

    fn push(
        &mut self,
        resource_type: ResourceType,
        name: &str,
        id: &str,
        description: String,
        path: &str,
    ) {
        self.resources.push(Resource {
            resource_type,
            name: name.to_string(),
            id: id.to_string(),
            description,
            url: build_dashboard_url(self.account_id, path, self.has_account),
        });
    }
}

/// Produce every dashboard resource declared by `config`, in a fixed order.
///
/// Sections that are absent or empty simply contribute nothing.
pub fn resources_from_config(
    config: &WranglerConfig,
    account_id: &str,
    has_account: bool,
) -> Vec<Resource> {
    let mut list = ResourceList::new(account_id, has_account);

    if let Some(name) = config.worker_name() {
        list.push(
            ResourceType::Worker,
            name,
            name,
            format!("Worker: {name}"),
            &format!("workers/services/view/{name}/production"),
        );

        if config.observability.is_some() {
            list.push(
                ResourceType::Observability,
                name,
                name,
                format!("Observability: {name}"),
                &format!("workers/services/view/{name}/production/observability"),
            );
        }

        if config
            .triggers
            .as_ref()
            .is_some_and(|triggers| !triggers.crons.is_empty())
        {
            list.push(
                ResourceType::CronTriggers,
                name,
                name,
                format!("Cron Triggers: {name}"),
                &format!("workers/services/view/{name}/production/settings#trigger-events"),
            );
        }
    }

    if let Some(queues) = &config.queues {
        for producer in &queues.producers {
            list.push(
                ResourceType::Queue,
                &producer.binding,
                &producer.queue,
                format!("Queue: {}", producer.queue),
                &format!("workers/queues/{}/metrics", producer.queue),
            );
        }
    }

    for workflow in &config.workflows {
        list.push(
            ResourceType::Workflow,
            &workflow.binding,
            &workflow.name,
            format!("Workflow: {}", workflow.name),
            &format!("workers/workflows/{}/instances", workflow.name),
        );
    }

    if let Some(browser) = config.browser.as_ref().filter(|b| !b.binding.is_empty()) {
        list.push(
            ResourceType::BrowserRendering,
            &browser.binding,
            "browser-rendering",
            "Browser Rendering".to_string(),
            "workers/browser-rendering/overview",
        );
    }

    if !config.vpc_services.is_empty() {
        list.push(
            ResourceType::Vpc,
            "vpc",
            "vpc",
            "VPC Services".to_string(),
            "workers/vpc/services",
        );
    }

    for bucket in &config.r2_buckets {
        list.push(
            ResourceType::R2,
            &bucket.binding,
            &bucket.bucket_name,
            format!("R2: {}", bucket.bucket_name),
            &format!("r2/default/buckets/{}", bucket.bucket_name),
        );
    }

    for kv in &config.kv_namespaces {
        list.push(
            ResourceType::Kv,
            &kv.binding,
            &kv.id,
            format!("KV: {} ({})", kv.binding, kv.id),
            &format!("workers/kv/namespaces/{}/metrics", kv.id),
        );
    }

    for db in &config.d1_databases {
        list.push(
            ResourceType::D1,
            &db.binding,
            &db.database_id,
            format!("D1: {} ({})", db.database_name, db.database_id),
            &format!("workers/d1/databases/{}/metrics", db.database_id),
        );
    }

    for pipeline in &config.pipelines {
        list.push(
            ResourceType::Pipeline,
            &pipeline.binding,
            &pipeline.pipeline,
            format!("Pipeline: {}", pipeline.pipeline),
            &format!("pipelines/{}/overview", pipeline.pipeline),
        );
    }

    for index in &config.vectorize {
        list.push(
            ResourceType::Vectorize,
            &index.binding,
            &index.index_name,
            format!("Vectorize: {}", index.index_name),
            &format!("ai/vectorize/{}", index.index_name),
        );
    }

    // One page per store, however many secrets it holds.
    let mut seen_store_ids = HashSet::new();
    for secret in &config.secrets_store_secrets {
        if !seen_store_ids.insert(secret.store_id.as_str()) {
            continue;
        }
        list.push(
            ResourceType::SecretsStore,
            &secret.store_id,
            &secret.store_id,
            format!("Secrets Store: {}", secret.store_id),
            &format!("secrets-store/{}", secret.store_id),
        );
    }

    if let Some(images) = config.images.as_ref().filter(|i| !i.binding.is_empty()) {
        list.push(
            ResourceType::Images,
            &images.binding,
            "images",
            "Images".to_string(),
            "images",
        );
    }

    debug!(
        target: "cf_open::dashboard",
        resource_count = list.resources.len(),
        has_account,
        "Resolved resources from configuration"
    );
    list.resources
}
