//! Portfolio window implemented with egui/eframe

use std::sync::Arc;

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tokio::runtime::Handle;
use tracing::{error, info};

use super::components::{self, nav::NavState, nav::Section};
use super::constants::*;
use super::page::Page;
use crate::config::{Config, ThemeMode};
use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::projects::{HttpProjectSource, ProjectLoader, ProjectSource};
use crate::toast::Toasts;
use crate::visibility::Stage;

struct PortfolioApp {
    config: Config,
    portfolio: Portfolio,
    stage: Stage,
    loader: ProjectLoader,
    contact: ContactForm,
    toasts: Toasts,
    nav: NavState,
    scroll_to: Option<Section>,
}

impl PortfolioApp {
    fn new(cc: &CreationContext<'_>, config: Config, portfolio: Portfolio, source: Arc<dyn ProjectSource>, runtime: Handle) -> Self {
        info!(owner = %portfolio.profile.name, "Initializing portfolio window");
        cc.egui_ctx.set_theme(theme_preference(config.theme));

        let mut loader = ProjectLoader::new(source, runtime);
        loader.activate();

        Self {
            stage: Stage::new(config.timing()),
            config,
            portfolio,
            loader,
            contact: ContactForm::default(),
            toasts: Toasts::default(),
            nav: NavState::default(),
            scroll_to: None,
        }
    }

    /// Advance everything that runs on its own clock
    fn poll(&mut self, now: f64) {
        self.loader.poll();
        if let Some(toast) = self.contact.poll(now) {
            self.toasts.push(toast, now);
        }
        self.toasts.prune(now);
    }

    fn needs_repaint(&self) -> bool {
        self.loader.is_pending() || self.contact.is_submitting() || !self.toasts.is_empty()
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.poll(now);
        self.stage.begin_frame(now);

        if let Some(section) = components::nav::ui(ctx, &mut self.nav, &self.portfolio.profile.name) {
            info!(section = section.label(), "Navigating");
            self.scroll_to = Some(section);
        }

        let portfolio = &self.portfolio;
        let loader = &mut self.loader;
        let contact = &mut self.contact;
        let mut page = Page {
            stage: &mut self.stage,
            toasts: &mut self.toasts,
            scroll_to: &mut self.scroll_to,
            now,
            section_threshold: self.config.section_threshold,
            stagger_threshold: self.config.stagger_threshold,
        };

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(PADDING);
                        ui.horizontal(|ui| {
                            ui.add_space(margin);
                            ui.vertical(|ui| {
                                ui.set_max_width(ui.available_width() - margin);
                                components::hero::ui(ui, &mut page, portfolio);
                                components::about::ui(ui, &mut page, portfolio);
                                components::skills::ui(ui, &mut page, portfolio);
                                components::experience::ui(ui, &mut page, portfolio);
                                components::projects::ui(ui, &mut page, portfolio, loader);
                                components::education::ui(ui, &mut page, portfolio);
                                components::contact::ui(ui, &mut page, portfolio, contact);
                                components::footer::ui(ui, &mut page, portfolio);
                            });
                        });
                    })
            })
            .inner;

        self.nav.set_scroll_offset(output.state.offset.y);
        let animating = self.stage.end_frame(output.inner_rect.into());

        components::toasts::ui(ctx, &self.toasts);

        if animating || self.needs_repaint() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            mounted = self.stage.mounted(),
            project_fetches = self.loader.attempts(),
            "Portfolio window exiting"
        );
    }
}

pub fn theme_preference(mode: ThemeMode) -> egui::ThemePreference {
    match mode {
        ThemeMode::System => egui::ThemePreference::System,
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
    }
}

pub fn run_gui(config: Config, portfolio: Portfolio, runtime: Handle) -> Result<()> {
    let http = HttpProjectSource::new(config.projects_url.clone())?;
    info!(url = %http.url(), "Project source configured");
    let source: Arc<dyn ProjectSource> = Arc::new(http);
    let title = format!("{} - Portfolio", portfolio.profile.name);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, config, portfolio, source, runtime)))),
    )
    .map_err(|err| {
        error!(error = %err, "egui window failed");
        anyhow!("Failed to launch portfolio window: {err}")
    })
}
