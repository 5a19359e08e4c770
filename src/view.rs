//! gpui front end - stage, controls, pagination dots and autoplay task.
//!
//! The view owns no navigation logic. It forwards clicks and keystrokes to
//! the input adapter, samples the stage transition each frame, and keeps a
//! single autoplay `Task` alive that sleeps until the engine's pending tick
//! is due. Replacing or dropping that task cancels the previous sleep.

use crate::carousel::{FeaturedCarousel, RenderState};
use crate::catalog::{FeaturedPath, PathId};
use crate::constants::{CARD_HEIGHT, CARD_WIDTH, INDICATOR_SIZE, STAGE_HEIGHT};
use crate::input::{CarouselInput, NavKey};
use crate::layout::{self, Indicator, VisualSlot};
use crate::navigation::{TickOutcome, TickToken};
use crate::settings::CarouselSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use crate::transition::StageTransition;
use gpui::*;
use gpui_component::ActiveTheme as _;
use std::time::Instant;

pub struct CarouselView {
    carousel: FeaturedCarousel<FeaturedPath>,
    transition: StageTransition<PathId>,
    autoplay_task: Option<Task<()>>,
    settings_watcher: Option<SettingsWatcher>,
    // Global keystroke observer; dropped with the view
    _keystrokes: Option<Subscription>,
}

impl CarouselView {
    pub fn new(paths: Vec<FeaturedPath>, settings: &CarouselSettings, cx: &mut Context<Self>) -> Self {
        let carousel = FeaturedCarousel::new(paths, settings);
        let mut transition = StageTransition::new(settings.transition_duration());
        transition.retarget(carousel.keyed_slots(), Instant::now());

        let keystrokes = settings.keyboard_navigation.then(|| {
            let view = cx.weak_entity();
            cx.observe_keystrokes(move |event, _window, cx| {
                let key = NavKey::from_key_name(&event.keystroke.key);
                if key == NavKey::Other {
                    return;
                }
                view.update(cx, |this, cx| this.handle_input(CarouselInput::Key(key), cx))
                    .ok();
            })
        });

        let settings_watcher =
            default_settings_path().and_then(|path| SettingsWatcher::new(path).ok());

        let mut view = Self {
            carousel,
            transition,
            autoplay_task: None,
            settings_watcher,
            _keystrokes: keystrokes,
        };
        view.schedule_autoplay(cx);
        view
    }

    pub fn handle_input(&mut self, input: CarouselInput, cx: &mut Context<Self>) {
        if self.carousel.handle(input) {
            self.restage(cx);
            self.schedule_autoplay(cx);
        }
    }

    /// Swap in a new published sequence from the provider.
    pub fn replace_paths(&mut self, paths: Vec<FeaturedPath>, cx: &mut Context<Self>) {
        self.carousel.replace_items(paths);
        self.restage(cx);
        self.schedule_autoplay(cx);
    }

    fn restage(&mut self, cx: &mut Context<Self>) {
        self.transition
            .retarget(self.carousel.keyed_slots(), Instant::now());
        cx.notify();
    }

    /// Keep exactly one sleeping task for the engine's pending tick.
    fn schedule_autoplay(&mut self, cx: &mut Context<Self>) {
        let Some(token) = self.carousel.engine().pending_tick() else {
            self.autoplay_task = None;
            return;
        };
        let wait = token.remaining(Instant::now());
        self.autoplay_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(wait).await;
            this.update(cx, |view, cx| view.fire_tick(token, cx)).ok();
        }));
    }

    fn fire_tick(&mut self, token: TickToken, cx: &mut Context<Self>) {
        if let TickOutcome::Advanced(_) = self.carousel.engine_mut().on_tick(token) {
            self.restage(cx);
        }
        self.schedule_autoplay(cx);
    }

    fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(ref mut watcher) = self.settings_watcher else {
            return;
        };
        match watcher.poll() {
            Some(SettingsEvent::Modified | SettingsEvent::Created) => {
                match CarouselSettings::load(watcher.path()) {
                    Ok(settings) => {
                        tracing::info!("Settings file changed, reloading...");
                        self.carousel.apply_settings(&settings);
                        self.transition.set_duration(settings.transition_duration());
                        self.schedule_autoplay(cx);
                    }
                    Err(e) => tracing::warn!("Ignoring invalid settings: {}", e),
                }
            }
            Some(SettingsEvent::Deleted) => tracing::warn!("Settings file deleted"),
            Some(SettingsEvent::Error(e)) => tracing::error!("Settings watch error: {}", e),
            None => {}
        }
    }
}

/// gpui has no perspective transform; narrow the card by cos(rotation) instead.
fn projected_width(slot: &VisualSlot) -> f32 {
    CARD_WIDTH * slot.scale * slot.rotate_y_degrees.to_radians().cos().abs()
}

fn render_card(
    index: usize,
    path: &FeaturedPath,
    slot: &VisualSlot,
    interactive: bool,
    stage_width: f32,
    cx: &mut Context<CarouselView>,
) -> Stateful<Div> {
    let width = projected_width(slot);
    let height = CARD_HEIGHT * slot.scale;
    let center_x = stage_width / 2.0 + slot.translate_x_percent / 100.0 * CARD_WIDTH;
    let border = if slot.offset == 0 {
        cx.theme().primary
    } else {
        cx.theme().border
    };

    let card = div()
        .id(ElementId::Name(format!("path-card-{}", index).into()))
        .absolute()
        .left(px(center_x - width / 2.0))
        .top(px((STAGE_HEIGHT - height) / 2.0))
        .w(px(width))
        .h(px(height))
        .opacity(slot.opacity)
        .rounded(px(12.0))
        .border_1()
        .border_color(border)
        .bg(cx.theme().background)
        .p(px(16.0))
        .flex()
        .flex_col()
        .gap(px(8.0))
        .overflow_hidden()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(cx.theme().foreground)
                .child(path.title.clone()),
        )
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child(path.summary.clone()),
        );

    if !interactive {
        return card;
    }
    card.cursor_pointer()
        .on_click(cx.listener(move |this, _, _, cx| {
            this.handle_input(CarouselInput::SelectCard(index), cx);
        }))
}

fn render_nav_button(
    id: &'static str,
    label: &'static str,
    input: CarouselInput,
    cx: &mut Context<CarouselView>,
) -> Stateful<Div> {
    let hover_bg = cx.theme().muted;
    div()
        .id(id)
        .w(px(36.0))
        .h(px(36.0))
        .rounded_full()
        .border_1()
        .border_color(cx.theme().border)
        .hover(move |s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .text_color(cx.theme().foreground)
        .child(label)
        .on_click(cx.listener(move |this, _, _, cx| {
            this.handle_input(input, cx);
        }))
}

fn render_indicator(indicator: Indicator, cx: &mut Context<CarouselView>) -> Stateful<Div> {
    let bg = if indicator.active {
        cx.theme().primary
    } else {
        cx.theme().muted
    };
    let index = indicator.index;
    div()
        .id(ElementId::Name(format!("path-dot-{}", index).into()))
        .w(px(INDICATOR_SIZE))
        .h(px(INDICATOR_SIZE))
        .rounded_full()
        .bg(bg)
        .cursor_pointer()
        .on_click(cx.listener(move |this, _, _, cx| {
            this.handle_input(CarouselInput::SelectIndicator(index), cx);
        }))
}

impl Render for CarouselView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.check_settings_reload(cx);

        let now = Instant::now();
        if self.transition.is_animating(now) {
            window.request_animation_frame();
        }

        let RenderState::Stage(stage) = self.carousel.render_state() else {
            return div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_color(cx.theme().muted_foreground)
                .child("No featured paths yet")
                .into_any_element();
        };

        let stage_width = f32::from(window.viewport_size().width);
        let sampled = self.transition.sample(now);
        let mut stage_el = div().relative().w_full().h(px(STAGE_HEIGHT));
        for i in layout::paint_order(&sampled) {
            let (Some(card), Some(slot)) = (stage.cards.get(i), sampled.get(i)) else {
                continue;
            };
            let interactive = self.transition.is_interactive(i);
            stage_el = stage_el.child(render_card(
                card.index,
                card.item,
                slot,
                interactive,
                stage_width,
                cx,
            ));
        }

        let mut dots = div().flex().gap(px(8.0)).items_center().justify_center();
        for indicator in stage.indicators {
            dots = dots.child(render_indicator(indicator, cx));
        }

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(16.0))
            .child(stage_el)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(16.0))
                    .child(render_nav_button("carousel-prev", "‹", CarouselInput::Previous, cx))
                    .child(dots)
                    .child(render_nav_button("carousel-next", "›", CarouselInput::Next, cx)),
            )
            .into_any_element()
    }
}
