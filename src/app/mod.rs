//! TLDR Bot landing page
//!
//! One egui app shared by the native and web builds: hero search page,
//! results list, per-article chat, all painted above the animated dot
//! field background.

mod chat;
mod header;
mod hero;
mod results;

use std::collections::HashMap;

use eframe::egui;
use tracing::info;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::collections::VecDeque;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::api::{ApiEvent, ApiRequest, Article, DEFAULT_API_BASE};
use crate::dots::{DotField, DotFieldConfig};
use crate::theme::{colors, landing_visuals};

#[cfg(not(target_arch = "wasm32"))]
use crate::api_native::NativeApiClient;
#[cfg(target_arch = "wasm32")]
use crate::api_wasm::{EventBuffer, WasmApiClient};

/// Static message shown for every failed backend request.
pub(crate) const REQUEST_FAILED: &str = "Something went wrong. Please try again.";

/// Which page the main column shows
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Hero,
    Results,
    Chat,
}

/// One chat bubble
pub(crate) struct ChatMessage {
    pub from_user: bool,
    pub text: String,
}

/// Landing page app - runs on both native and WASM
pub struct LandingApp {
    /// Backend client (platform-specific transport)
    #[cfg(not(target_arch = "wasm32"))]
    api: NativeApiClient,
    #[cfg(target_arch = "wasm32")]
    api: WasmApiClient,
    /// Buffered request answers (WASM only; native drains a channel)
    #[cfg(target_arch = "wasm32")]
    api_events: EventBuffer,

    /// The single request currently in flight, if any
    pending: Option<ApiRequest>,
    /// Error line shown after a failed request
    pub(crate) error: Option<&'static str>,

    // Page state
    pub(crate) view: View,
    pub(crate) search_query: String,
    pub(crate) articles: Vec<Article>,
    /// Summaries fetched so far, by article id
    pub(crate) summaries: HashMap<i64, String>,
    /// Card currently showing its summary
    pub(crate) expanded_card: Option<i64>,
    /// Article the chat panel is about
    pub(crate) active_article: Option<Article>,
    pub(crate) chat_messages: Vec<ChatMessage>,
    pub(crate) chat_input: String,

    /// Animated dot-grid background
    dot_field: DotField,
    /// FPS counter
    pub(crate) fps_counter: header::FpsCounter,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(landing_visuals());

        let base = resolve_api_base();
        info!(base = %base, "Backend base URL resolved");

        #[cfg(target_arch = "wasm32")]
        let api_events: EventBuffer = Rc::new(RefCell::new(VecDeque::new()));
        #[cfg(target_arch = "wasm32")]
        let api = WasmApiClient::connect(&base, api_events.clone());
        #[cfg(not(target_arch = "wasm32"))]
        let api = NativeApiClient::connect(&base);

        let mut dot_field = DotField::new(DotFieldConfig {
            color: colors::ACCENT,
            ..DotFieldConfig::default()
        });
        dot_field.mount(&cc.egui_ctx);

        Self {
            api,
            #[cfg(target_arch = "wasm32")]
            api_events,
            pending: None,
            error: None,
            view: View::default(),
            search_query: String::new(),
            articles: Vec::new(),
            summaries: HashMap::new(),
            expanded_card: None,
            active_article: None,
            chat_messages: Vec::new(),
            chat_input: String::new(),
            dot_field,
            fps_counter: header::FpsCounter::new(),
        }
    }

    // ------------------------------------------------------------------
    // Backend plumbing
    // ------------------------------------------------------------------

    fn submit(&mut self, request: ApiRequest) {
        if self.pending.is_some() {
            return;
        }
        info!(?request, "Submitting backend request");
        self.error = None;
        self.api.submit(request.clone());
        self.pending = Some(request);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn drain_api_events(&mut self) -> Vec<ApiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.api.rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[cfg(target_arch = "wasm32")]
    fn drain_api_events(&mut self) -> Vec<ApiEvent> {
        self.api_events.borrow_mut().drain(..).collect()
    }

    fn apply_api_event(&mut self, event: ApiEvent) {
        self.pending = None;
        match event {
            ApiEvent::SearchResults(articles) => {
                info!(count = articles.len(), "Search answered");
                self.articles = articles;
                self.expanded_card = None;
                self.view = View::Results;
            }
            ApiEvent::Summary {
                article_id,
                summary,
            } => {
                self.summaries.insert(article_id, summary);
                self.expanded_card = Some(article_id);
            }
            ApiEvent::ChatAnswer(answer) => {
                self.chat_messages.push(ChatMessage {
                    from_user: false,
                    text: answer,
                });
            }
            ApiEvent::Failed(_) => {
                self.error = Some(REQUEST_FAILED);
            }
        }
    }

    pub(crate) fn pending_search(&self) -> bool {
        matches!(self.pending, Some(ApiRequest::Search { .. }))
    }

    pub(crate) fn pending_chat(&self) -> bool {
        matches!(self.pending, Some(ApiRequest::Chat { .. }))
    }

    pub(crate) fn pending_summary_for(&self, article_id: i64) -> bool {
        matches!(
            self.pending,
            Some(ApiRequest::Summarize { article_id: id }) if id == article_id
        )
    }

    pub(crate) fn request_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    // ------------------------------------------------------------------
    // Page actions
    // ------------------------------------------------------------------

    pub(crate) fn start_search(&mut self) {
        let query = self.search_query.trim();
        if query.is_empty() {
            return;
        }
        let query = query.to_string();
        self.submit(ApiRequest::Search { query });
    }

    /// Collapse an open summary, or open it - fetching once per article.
    pub(crate) fn toggle_summary(&mut self, article_id: i64) {
        if self.expanded_card == Some(article_id) {
            self.expanded_card = None;
        } else if self.summaries.contains_key(&article_id) {
            self.expanded_card = Some(article_id);
        } else {
            self.submit(ApiRequest::Summarize { article_id });
        }
    }

    pub(crate) fn start_chat(&mut self, article: Article) {
        info!(article_id = article.id, "Opening chat");
        self.active_article = Some(article);
        self.chat_messages.clear();
        self.chat_input.clear();
        self.view = View::Chat;
    }

    pub(crate) fn send_chat_message(&mut self) {
        let question = self.chat_input.trim().to_string();
        if question.is_empty() {
            return;
        }
        let Some(article) = &self.active_article else {
            return;
        };
        let article_id = article.id;
        self.chat_messages.push(ChatMessage {
            from_user: true,
            text: question.clone(),
        });
        self.chat_input.clear();
        self.submit(ApiRequest::Chat {
            article_id,
            question,
        });
    }

    pub(crate) fn dot_count(&self) -> usize {
        self.dot_field.dot_count()
    }
}

fn resolve_api_base() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("TLDR_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    }
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::eval("window.__tldr_api_base")
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.drain_api_events() {
            self.apply_api_event(event);
        }

        // Background: page fill plus the dot field, under every panel.
        // The field reschedules the next frame itself while mounted.
        let screen = ctx.screen_rect();
        self.dot_field.resize(screen.width(), screen.height());
        match ctx.input(|i| i.pointer.hover_pos()) {
            Some(pos) => self
                .dot_field
                .on_pointer_move(pos.x - screen.min.x, pos.y - screen.min.y),
            None => self.dot_field.on_pointer_leave(),
        }
        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, colors::BG_PRIMARY);
        self.dot_field.tick(&painter, screen.min);

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_PRIMARY)
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::TRANSPARENT)
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| {
                if let Some(message) = self.error {
                    ui.colored_label(colors::ERROR, message);
                    ui.add_space(8.0);
                }

                match self.view {
                    View::Hero => self.render_hero(ui),
                    View::Results => self.render_results(ui),
                    View::Chat => self.render_chat(ui),
                }
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.dot_field.unmount();
    }
}
