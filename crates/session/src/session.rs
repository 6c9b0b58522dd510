use meter_config::MeterConfig;
use meter_core::{seed_readings, MeterError, Reading, Result, SampleWindow};
use meter_renderer::{render, svg, to_json, GaugeView};
use meter_theme::Theme;
use tracing::{error, info, warn};

/// A mounted gauge: its config, its reading window and the last valid view.
///
/// The window lives exactly as long as the session.  Every mutation is
/// followed by a full re-render; if rendering fails the previous view stays.
#[derive(Debug)]
pub struct GaugeSession {
    config: MeterConfig,
    theme:  Theme,
    window: SampleWindow,
    view:   GaugeView,
}

impl GaugeSession {
    /// Mount a gauge using the wall clock to stamp the seed sequence.
    pub fn mount(config: MeterConfig) -> Result<Self> {
        Self::mount_at(config, chrono::Utc::now().timestamp_millis())
    }

    /// Mount a gauge, stamping the seed sequence (if used) to end at `now_ms`.
    ///
    /// Initial readings that fail validation are skipped with a warning.
    pub fn mount_at(config: MeterConfig, now_ms: i64) -> Result<Self> {
        config.validate()?;
        let mut window = SampleWindow::new(config.window.capacity)?;

        let initial = if config.data.is_empty() {
            seed_readings(now_ms)
        } else {
            config.data.clone()
        };
        for reading in initial {
            if let Err(e) = window.push(reading) {
                warn!("Skipping initial reading {reading:?}: {e}");
            }
        }

        let view = render(&window, &config.gauge)?;
        let theme = Theme::from_config(&config.theme, &config.gauge.base_color);
        info!(
            title = %config.gauge.title,
            orientation = ?config.gauge.orientation,
            readings = window.len(),
            "gauge mounted"
        );

        Ok(Self { config, theme, window, view })
    }

    /// Push a reading and re-render.
    ///
    /// A rejected reading leaves both the window and the view untouched.
    pub fn ingest(&mut self, reading: Reading) -> Result<&GaugeView> {
        if let Err(e) = self.window.push(reading) {
            warn!("Rejected reading {reading:?}: {e}");
            return Err(MeterError::Reading(e));
        }
        self.update()
    }

    /// Re-render from the current window and config.
    pub fn update(&mut self) -> Result<&GaugeView> {
        match render(&self.window, &self.config.gauge) {
            Ok(view) => {
                self.view = view;
                Ok(&self.view)
            }
            Err(e) => {
                error!("Render failed; keeping previous view: {e}");
                Err(e)
            }
        }
    }

    /// Swap in a new config.  An invalid config is refused and the old one kept.
    pub fn reconfigure(&mut self, config: MeterConfig) -> Result<()> {
        config.validate()?;
        self.window.resize(config.window.capacity)?;
        self.theme = Theme::from_config(&config.theme, &config.gauge.base_color);
        self.config = config;
        self.update()?;
        Ok(())
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn view(&self) -> &GaugeView {
        &self.view
    }

    /// The current view as an SVG document.
    pub fn svg(&self) -> String {
        let style = self.theme.gauge_style(&self.config.gauge);
        svg::to_svg(&self.view, &self.theme, &style)
    }

    /// Write the current view to every configured output path.
    pub async fn write_outputs(&self) -> Result<()> {
        let output = &self.config.output;
        if let Some(path) = &output.svg_path {
            tokio::fs::write(path, self.svg()).await.map_err(|e| {
                MeterError::Output(format!("cannot write '{}': {e}", path.display()))
            })?;
        }
        if let Some(path) = &output.json_path {
            tokio::fs::write(path, to_json(&self.view)?).await.map_err(|e| {
                MeterError::Output(format!("cannot write '{}': {e}", path.display()))
            })?;
        }
        Ok(())
    }
}
