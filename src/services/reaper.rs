//! 过期链接清理任务
//!
//! 定时调用 `LinkEngine::cleanup_expired`，尽力而为，不保证实时性。

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, trace, warn};

use crate::config::ReaperConfig;
use crate::services::LinkEngine;

pub struct Reaper {
    engine: Arc<LinkEngine>,
    interval: Duration,
}

impl Reaper {
    pub fn new(engine: Arc<LinkEngine>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    /// 按配置创建，未启用或间隔为 0 时返回 None
    pub fn from_config(engine: Arc<LinkEngine>, config: &ReaperConfig) -> Option<Self> {
        if !config.enabled {
            debug!("Reaper: disabled by configuration");
            return None;
        }
        // 间隔为 0 会变成空转循环
        if config.interval_secs == 0 {
            warn!("Reaper: interval_secs is 0, not starting");
            return None;
        }
        Some(Self::new(engine, Duration::from_secs(config.interval_secs)))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 启动后台清理循环（作为异步方法运行，不会返回）
    pub async fn run(&self) {
        info!("Reaper: started, interval {:?}", self.interval);
        loop {
            sleep(self.interval).await;

            trace!("Reaper: triggering scheduled cleanup");
            let removed = self.engine.cleanup_expired();
            if removed > 0 {
                debug!("Reaper: removed {} expired link(s)", removed);
            }
        }
    }

    /// 在 tokio 运行时上启动，abort 返回的句柄即可停止
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }
}
