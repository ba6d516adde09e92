use crate::{
    audio::toggle::{MusicSink, MusicToggle, NullSink},
    deck::model::Deck,
    deck::state::{DeckState, GoTo},
    effects::confetti::{ConfettiBurst, ENTRY_INTENSITY},
    effects::effect::EffectCtx,
    effects::hearts::{DEFAULT_DURATION_MS, FireworkHearts},
    effects::scheduler::EffectScheduler,
    foundation::core::{Affine, Hsla, Rect, Surface, TickIndex},
    foundation::error::FlipdeckResult,
    foundation::math::stable_hash64,
    input::map::{Command, InputEvent, InputMap, ScriptEvent, SlideTabs},
    render::scene::Scene,
    reveal::typewriter::Typewriter,
};

/// One interactive flipbook run.
///
/// The session owns every piece of mutable UI state explicitly: the page
/// state machine, the effect scheduler and its overlay surface, the
/// typewriter, the slide-tab panels, the music toggle and its sink, the
/// surface dimensions and the tick counter.
///
/// Driving a session is three calls: [`Session::handle_event`] for each
/// input, [`Session::tick`] once per animation frame, [`Session::scene`]
/// to obtain what to draw.
pub struct Session {
    deck: Deck,
    state: DeckState,
    scheduler: EffectScheduler,
    typewriter: Option<Typewriter>,
    input: InputMap,
    music: MusicToggle,
    sink: Box<dyn MusicSink>,
    surface: Surface,
    tick: TickIndex,
}

impl Session {
    /// Start a session with no audio device (a [`NullSink`]).
    pub fn new(deck: Deck) -> FlipdeckResult<Self> {
        Self::with_sink(deck, Box::new(NullSink))
    }

    /// Start a session bound to the given music sink.
    ///
    /// Validates the deck, stacks the pages, applies the configured music
    /// volume and runs page 0's entry effects.
    pub fn with_sink(deck: Deck, mut sink: Box<dyn MusicSink>) -> FlipdeckResult<Self> {
        deck.validate()?;
        let flip_ticks = deck.tick_rate.ticks_for_ms(deck.flip_ms);
        let state = DeckState::new(deck.pages.len(), flip_ticks, deck.flip_ease)?;
        let surface = deck.surface;
        let has_tab: Vec<bool> = deck.pages.iter().map(|p| p.slide_tab).collect();

        if let Some(music) = &deck.music {
            sink.set_volume(music.volume);
        }

        let mut session = Self {
            state,
            scheduler: EffectScheduler::new(surface),
            typewriter: None,
            input: InputMap::new(&has_tab),
            music: MusicToggle::default(),
            sink,
            surface,
            tick: TickIndex(0),
            deck,
        };
        session.enter_page(0);
        Ok(session)
    }

    /// Deliver one input event.
    #[tracing::instrument(skip(self))]
    pub fn handle_event(&mut self, event: &InputEvent) {
        let Some(command) = self.input.map(event) else {
            return;
        };
        self.apply(command);
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.go_to(self.state.current() as i64 + 1),
            Command::Prev => self.go_to(self.state.current() as i64 - 1),
            Command::Restart => {
                self.state.hard_reset_to(0);
                self.enter_page(0);
            }
            Command::Start => {
                if let Some(spec) = self.deck.music.clone() {
                    self.music.start(self.sink.as_mut(), &spec);
                }
                self.go_to(self.state.current() as i64 + 1);
            }
            Command::BurstHearts => {
                let seed = self.burst_seed("hearts");
                self.scheduler
                    .start(Box::new(FireworkHearts::new(DEFAULT_DURATION_MS, seed)));
            }
            Command::ToggleMusic => {
                if self.deck.music.is_some() {
                    self.music.toggle(self.sink.as_mut());
                }
            }
            Command::Resize(surface) => {
                self.surface = surface;
                self.scheduler.resize(surface);
            }
        }
    }

    fn go_to(&mut self, target: i64) {
        if self.state.go_to(target) == GoTo::HardReset {
            self.enter_page(self.state.current());
        }
    }

    /// Run the entry effects of a page that just became current.
    fn enter_page(&mut self, page: usize) {
        let Some(spec) = self.deck.pages.get(page) else {
            return;
        };
        if let Some(text) = &spec.typewriter {
            self.typewriter = Some(Typewriter::new(
                page,
                text,
                Typewriter::DEFAULT_INTERVAL_MS,
            ));
        }
        if spec.confetti_on_entry {
            let seed = self.burst_seed("confetti");
            self.scheduler
                .start(Box::new(ConfettiBurst::new(ENTRY_INTENSITY, self.surface, seed)));
        }
    }

    fn burst_seed(&self, kind: &str) -> u64 {
        stable_hash64(self.deck.seed ^ self.tick.0, kind)
    }

    /// Advance one animation tick: the flip transition (entry effects run
    /// exactly once on settle), the typewriter, then the effect overlay.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self) {
        self.tick.0 += 1;
        if let Some(settled) = self.state.tick() {
            self.enter_page(settled.page);
        }

        let tick_ms = self.deck.tick_rate.tick_duration_ms();
        let current = self.state.current();
        if let Some(typewriter) = &mut self.typewriter {
            typewriter.tick(tick_ms, current);
        }

        self.scheduler.tick(EffectCtx {
            surface: self.surface,
            tick_ms,
        });
    }

    /// Compose the full scene: page cards in stacking order, then the
    /// effect overlay on top (the canvas sits above the pages).
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.surface);

        let mut order: Vec<usize> = (0..self.state.page_count()).collect();
        order.sort_by_key(|&i| self.state.page(i).map_or(0, |p| p.z));

        let card = self.card_rect();
        let center = card.center();
        let flip = self.state.flip_progress();

        for index in order {
            let Some(page) = self.state.page(index) else {
                continue;
            };
            if page.turned && !page.flipping {
                continue;
            }

            // Half-turn squash: edge-on at progress 0.5, back face past it.
            let transform = match flip {
                Some((flipping, progress)) if flipping == index => {
                    let scale_x = (std::f64::consts::PI * progress).cos().abs().max(0.01);
                    Affine::translate((center.x, center.y))
                        * Affine::scale_non_uniform(scale_x, 1.0)
                        * Affine::translate((-center.x, -center.y))
                }
                _ => Affine::IDENTITY,
            };
            let hue = (index as f64 * 36.0).rem_euclid(360.0);
            let color = Hsla::new(hue, 0.25, 0.92, 1.0).to_premul();
            scene.fill_rect(card, transform, color);
        }

        scene.extend_from(self.scheduler.scene());
        scene
    }

    fn card_rect(&self) -> Rect {
        let w = self.surface.width_f64();
        let h = self.surface.height_f64();
        Rect::new(w * 0.15, h * 0.10, w * 0.85, h * 0.90)
    }

    /// Index of the current page.
    pub fn current_page(&self) -> usize {
        self.state.current()
    }

    /// True while a flip transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// The page state machine.
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// The deck this session runs.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// True while a particle effect owns the overlay.
    pub fn is_effect_active(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Live particle count of the active effect.
    pub fn effect_particles(&self) -> usize {
        self.scheduler.active_particles()
    }

    /// The typewriter of the most recently entered text page, if any.
    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    /// The music toggle state.
    pub fn music(&self) -> &MusicToggle {
        &self.music
    }

    /// Slide-tab panel states.
    pub fn tabs(&self) -> &SlideTabs {
        self.input.tabs()
    }

    /// Current drawing-surface dimensions.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Ticks advanced since session start.
    pub fn tick_index(&self) -> TickIndex {
        self.tick
    }
}

/// Replay a scripted timeline into `session`, advancing `until_tick` ticks.
///
/// Events fire in `at_tick` order, each delivered before the tick of the
/// same index advances; events due at `until_tick` are delivered last
/// without a further advance.
pub fn run_script(session: &mut Session, script: &[ScriptEvent], until_tick: u64) {
    let mut ordered: Vec<&ScriptEvent> = script.iter().collect();
    ordered.sort_by_key(|e| e.at_tick);

    let mut delivered = 0;
    for now in 0..until_tick {
        while delivered < ordered.len() && ordered[delivered].at_tick <= now {
            session.handle_event(&ordered[delivered].event);
            delivered += 1;
        }
        session.tick();
    }
    while delivered < ordered.len() && ordered[delivered].at_tick <= until_tick {
        session.handle_event(&ordered[delivered].event);
        delivered += 1;
    }
}
