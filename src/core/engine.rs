use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline's fetch, synthesize and emit phases in order.
pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<String> {
        tracing::info!("🚀 Starting table generation");
        self.monitor.log_stats("Start");

        tracing::info!("📥 Fetching word list...");
        let words = self.pipeline.extract().await?;
        tracing::info!("Fetched {} words", words.len());
        self.monitor.log_stats("Fetch");

        tracing::info!("🔧 Synthesizing table...");
        let grid = self.pipeline.transform(words).await?;
        tracing::info!(
            "Synthesized {} x {} cells",
            grid.shape.rows,
            grid.shape.cols
        );
        self.monitor.log_stats("Synthesize");

        tracing::info!("💾 Writing data module...");
        let output_path = self.pipeline.load(grid).await?;
        self.monitor.log_stats("Emit");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
