// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;

use plugin_sample::config::{load_and_validate_config, Runtime, RuntimeBuilder};
use plugin_sample::element::PluginSampleFilter;
use plugin_sample::engine::FilterRunner;
use plugin_sample::events::{EventType, MediaEvent};
use plugin_sample::media::Frame;
use plugin_sample::observability::init_tracing;
use plugin_sample::traits::EventHandler;

const PATTERN_SIZE: u32 = 64;

/// One entry of an invocation script
#[derive(Debug, Deserialize)]
struct Invocation {
    object: String,
    method: String,
    #[serde(default)]
    params: Value,
}

/// Logs every event it receives
struct LogEvents;

#[async_trait]
impl EventHandler for LogEvents {
    async fn handle(&self, event: &MediaEvent) {
        tracing::info!(
            event = %event.event_type,
            source = %event.source,
            data = %event.data,
            "event received"
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <config.yaml> [invocations.json]", args[0]);
        eprintln!("Example: {} configs/plugin-sample.yaml configs/invocations.json", args[0]);
        std::process::exit(1);
    }

    let config = load_and_validate_config(&args[1])
        .with_context(|| format!("loading config {}", args[1]))?;
    let runtime = RuntimeBuilder::from_config(&config).context("building runtime")?;

    let mut element_ids: Vec<&String> = runtime.elements.keys().collect();
    element_ids.sort();

    let handler: Arc<dyn EventHandler> = Arc::new(LogEvents);
    for config_id in &element_ids {
        let id = &runtime.elements[*config_id];
        for event in EventType::ALL {
            runtime
                .media_set
                .connect(id, event.as_str(), handler.clone())
                .with_context(|| format!("connecting {} to {}", event, config_id))?;
        }
    }

    if let Some(path) = args.get(2) {
        apply_invocations(&runtime, path)?;
    }

    println!("Test pattern {}x{} through {} filter(s)", PATTERN_SIZE, PATTERN_SIZE, element_ids.len());
    for config_id in element_ids {
        let id = &runtime.elements[config_id];
        let Some(filter) = runtime.media_set.object_as::<PluginSampleFilter>(id) else {
            continue;
        };
        let settings = filter.settings();
        let started = Instant::now();
        let frame = run_pattern(filter).await?;
        let lit = frame.data.chunks_exact(4).filter(|px| px[0] > 127).count();
        println!(
            "  {:<12} filterType={} edgeThreshold={:<3} lit={:>5}/{} in {:?}",
            config_id,
            settings.filter_type(),
            settings.edge_threshold(),
            lit,
            frame.pixel_count(),
            started.elapsed()
        );
    }

    Ok(())
}

/// Apply a JSON array of invocations, logging each response or error.
fn apply_invocations(runtime: &Runtime, path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let script: Vec<Invocation> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path))?;

    for call in script {
        let Some(id) = runtime.element(&call.object) else {
            bail!("invocation targets unknown element '{}'", call.object);
        };
        match runtime.media_set.invoke(id, &call.method, &call.params) {
            Ok(response) => {
                tracing::info!(object = %call.object, method = %call.method, %response, "invoke ok")
            }
            Err(e) => tracing::warn!(
                object = %call.object,
                method = %call.method,
                code = e.code(),
                error = %e,
                "invoke failed"
            ),
        }
    }
    Ok(())
}

async fn run_pattern(filter: Arc<PluginSampleFilter>) -> Result<Frame> {
    let (in_tx, in_rx) = mpsc::channel(1);
    let (out_tx, mut out_rx) = mpsc::channel(1);
    let handle = FilterRunner::new(filter).spawn(in_rx, out_tx);

    in_tx
        .send(Frame::test_pattern(PATTERN_SIZE, PATTERN_SIZE))
        .await
        .context("runner input closed")?;
    drop(in_tx);

    let frame = out_rx.recv().await;
    let stats = handle.await.context("runner task failed")?;
    match frame {
        Some(frame) => Ok(frame),
        None => bail!("filter produced no output ({} error(s))", stats.errors),
    }
}
