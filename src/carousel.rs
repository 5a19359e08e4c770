//! Featured carousel - the item sequence bound to a navigation engine.
//!
//! `FeaturedCarousel` is what a view renders from: it owns the current
//! published sequence, keeps the engine's window in step with it, and
//! produces a `RenderState` per frame. `MountedCarousel` adds the keyboard
//! subscription whose lifetime matches the mounted view.

use crate::input::{CarouselInput, KeySubscription, KeyboardHub, apply_input};
use crate::layout::{self, Indicator, VisualSlot};
use crate::navigation::{CarouselEngine, Clock, SystemClock};
use crate::settings::CarouselSettings;
use crate::types::CarouselItem;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// One card ready to draw.
#[derive(Debug)]
pub struct StageCard<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub slot: VisualSlot,
}

/// Everything a view needs for one frame of a non-empty carousel.
#[derive(Debug)]
pub struct Stage<'a, T> {
    pub active_index: usize,
    pub cards: Vec<StageCard<'a, T>>,
    pub indicators: Vec<Indicator>,
}

/// What to draw: the stage, or the designed empty fallback.
#[derive(Debug)]
pub enum RenderState<'a, T> {
    Empty,
    Stage(Stage<'a, T>),
}

impl<T> RenderState<'_, T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug)]
pub struct FeaturedCarousel<T: CarouselItem, C: Clock = SystemClock> {
    items: Vec<T>,
    engine: CarouselEngine<C>,
}

impl<T: CarouselItem> FeaturedCarousel<T, SystemClock> {
    pub fn new(items: Vec<T>, settings: &CarouselSettings) -> Self {
        Self::with_clock(items, settings, SystemClock)
    }
}

impl<T: CarouselItem, C: Clock> FeaturedCarousel<T, C> {
    pub fn with_clock(items: Vec<T>, settings: &CarouselSettings, clock: C) -> Self {
        let engine = CarouselEngine::with_clock(items.len(), settings, clock);
        Self { items, engine }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn engine(&self) -> &CarouselEngine<C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine<C> {
        &mut self.engine
    }

    pub fn active_index(&self) -> Option<usize> {
        self.engine.active_index()
    }

    pub fn active_item(&self) -> Option<&T> {
        self.engine.active_index().and_then(|i| self.items.get(i))
    }

    /// Swap in a new upstream sequence.
    ///
    /// The active card follows its key if it survived the change; otherwise
    /// the old index is clamped to the new length.
    pub fn replace_items(&mut self, items: Vec<T>) {
        let preferred = self
            .active_item()
            .map(|item| item.key())
            .and_then(|key| items.iter().position(|item| item.key() == key));
        self.items = items;
        self.engine.retarget(self.items.len(), preferred);
    }

    /// Route a user input through the adapter.
    pub fn handle(&mut self, input: CarouselInput) -> bool {
        apply_input(&mut self.engine, input)
    }

    /// Fire the autoplay tick if due.
    pub fn poll(&mut self) -> Option<usize> {
        self.engine.poll()
    }

    pub fn apply_settings(&mut self, settings: &CarouselSettings) {
        self.engine.apply_settings(settings);
    }

    /// Projected slot for every item, in sequence order.
    pub fn slots(&self) -> Vec<VisualSlot> {
        match self.engine.active_index() {
            Some(active) => layout::project_all(active, self.items.len()),
            None => Vec::new(),
        }
    }

    /// `slots()` paired with each item's key.
    pub fn keyed_slots(&self) -> Vec<(T::Key, VisualSlot)> {
        self.items
            .iter()
            .map(|item| item.key())
            .zip(self.slots())
            .collect()
    }

    pub fn render_state(&self) -> RenderState<'_, T> {
        let Some(active) = self.engine.active_index() else {
            return RenderState::Empty;
        };
        let len = self.items.len();
        let cards = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| StageCard {
                index,
                item,
                slot: layout::project(index, active, len),
            })
            .collect();
        RenderState::Stage(Stage {
            active_index: active,
            cards,
            indicators: layout::indicators(Some(active), len),
        })
    }

    pub fn teardown(&mut self) {
        self.engine.teardown();
    }
}

/// A carousel attached to a keyboard source for as long as it lives.
///
/// Dropping it detaches the key listener and cancels the autoplay timer.
#[derive(Debug)]
pub struct MountedCarousel<T: CarouselItem + 'static, C: Clock + 'static = SystemClock> {
    carousel: Rc<RefCell<FeaturedCarousel<T, C>>>,
    keys: Option<KeySubscription>,
}

impl<T: CarouselItem + 'static, C: Clock + 'static> MountedCarousel<T, C> {
    pub fn mount(
        carousel: FeaturedCarousel<T, C>,
        hub: &KeyboardHub,
        settings: &CarouselSettings,
    ) -> Self {
        let carousel = Rc::new(RefCell::new(carousel));
        let keys = settings.keyboard_navigation.then(|| {
            let weak = Rc::downgrade(&carousel);
            hub.subscribe(move |key| {
                if let Some(carousel) = weak.upgrade() {
                    carousel.borrow_mut().handle(CarouselInput::Key(key));
                }
            })
        });
        tracing::debug!(keyboard = keys.is_some(), "Carousel mounted");
        Self { carousel, keys }
    }

    pub fn is_keyboard_attached(&self) -> bool {
        self.keys.is_some()
    }

    pub fn borrow(&self) -> Ref<'_, FeaturedCarousel<T, C>> {
        self.carousel.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, FeaturedCarousel<T, C>> {
        self.carousel.borrow_mut()
    }
}

impl<T: CarouselItem + 'static, C: Clock + 'static> Drop for MountedCarousel<T, C> {
    fn drop(&mut self) {
        self.keys.take();
        if let Ok(mut carousel) = self.carousel.try_borrow_mut() {
            carousel.teardown();
        }
        tracing::debug!("Carousel unmounted");
    }
}
