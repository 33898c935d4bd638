use crate::clock::Clock;
use crate::settings::{self, Settings};
use crate::share::{IntentShare, NativeShare, current_url};
use crate::utils::*;
use gloo::timers::callback::Timeout;
use memento_core as game;
use game::{ClearTicket, Difficulty, FlipOutcome, TileFace, TileIndex};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const PLACEHOLDER: &str = "❓";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Flip(TileIndex),
    Tick,
    ClearRevealed(ClearTicket),
    NewGame,
    SetDifficulty(Difficulty),
    Share,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: TileIndex,
    face: TileFace,
    #[prop_or_default]
    locked: bool,
    callback: Callback<TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    use TileFace::*;

    let TileProps {
        index,
        face,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "tile",
        match face {
            Hidden => classes!(),
            Revealed(_) => classes!("open"),
            Matched(_) => classes!("open", "matched"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    let label = face.symbol().map_or(PLACEHOLDER, game::Symbol::glyph);

    html! {
        <td {class} {onclick}>{label}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Start on this difficulty instead of the saved one
    #[prop_or_default]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: Settings,
    engine: game::PlayEngine,
    seeds: SeedSource,
    clock: Clock,
    pending_clear: Option<(ClearTicket, Timeout)>,
}

impl GameView {
    fn start_clock(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.clock.start(move || link.send_message(Msg::Tick));
    }

    fn schedule_clear(&mut self, ctx: &Context<Self>, ticket: ClearTicket) {
        let link = ctx.link().clone();
        let timeout = Timeout::new(game::CLEAR_DELAY_MS, move || {
            link.send_message(Msg::ClearRevealed(ticket))
        });
        self.pending_clear = Some((ticket, timeout));
    }

    fn restart(&mut self, ctx: &Context<Self>) {
        // dropping the timeout cancels it
        self.pending_clear = None;
        self.engine
            .start_game(self.settings.difficulty, self.seeds.next_seed());
        self.start_clock(ctx);
    }

    fn flip(&mut self, ctx: &Context<Self>, index: TileIndex) -> bool {
        let outcome = self.engine.flip(index);

        if let FlipOutcome::Paired { matched, won, clear } = outcome {
            log::debug!("pair {:?} matched: {}", clear.tiles(), matched);
            self.schedule_clear(ctx, clear);
            if won {
                log::info!(
                    "won {} in {} moves and {}s",
                    self.engine.difficulty(),
                    self.engine.moves(),
                    self.engine.elapsed_secs()
                );
                self.clock.stop();
            }
        }

        outcome.has_update()
    }

    fn clear_revealed(&mut self, ticket: ClearTicket) -> bool {
        if matches!(self.pending_clear, Some((pending, _)) if pending == ticket) {
            self.pending_clear = None;
        }
        self.engine.clear_revealed(ticket)
    }

    fn share(&self) {
        let Some(summary) = game::ScoreSummary::from_engine(&self.engine) else {
            log::warn!("nothing to share before winning");
            return;
        };

        let message = summary.message(&current_url());
        match game::share_with_fallback(&NativeShare, &IntentShare, &message) {
            Ok(via) => log::info!("score shared via {:?}", via),
            Err(err) => log::warn!("could not share score: {}", err),
        }
    }

    fn view_header(&self, ctx: &Context<Self>) -> Html {
        let difficulty = self.engine.difficulty();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_difficulty = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Difficulty>() {
                Ok(difficulty) => Some(Msg::SetDifficulty(difficulty)),
                Err(err) => {
                    log::warn!("bad difficulty {:?}: {}", select.value(), err);
                    None
                }
            }
        });
        let time_class = classes!("time", self.clock.is_running().then_some("running"));

        html! {
            <nav>
                <span class={time_class}>{format!("⏱ Time: {}s", self.engine.elapsed_secs())}</span>
                <span class="moves">{format!("🌀 Moves: {}", self.engine.moves())}</span>
                <button onclick={cb_new_game}>{"Restart"}</button>
                <select onchange={cb_difficulty}>
                    {
                        for Difficulty::ALL.into_iter().map(|option| html! {
                            <option value={option.name()} selected={option == difficulty}>
                                {settings::difficulty_label(option)}
                            </option>
                        })
                    }
                </select>
            </nav>
        }
    }

    fn view_banner(&self, ctx: &Context<Self>) -> Html {
        if !self.engine.is_won() {
            return html! {};
        }

        let cb_new_game = ctx.link().callback(|_| Msg::NewGame);
        let cb_share = ctx.link().callback(|_| Msg::Share);

        html! {
            <article class="won">
                {format!(
                    "🎉 You Won in {} moves & {}s!",
                    self.engine.moves(),
                    self.engine.elapsed_secs()
                )}
                <footer>
                    <button onclick={cb_new_game}>{"Play Again"}</button>
                    <button class="share" onclick={cb_share}>{"Share 📨"}</button>
                </footer>
            </article>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, difficulty } = ctx.props().clone();

        let mut settings: Settings = LocalOrDefault::local_or_default();
        if let Some(difficulty) = difficulty {
            settings.difficulty = difficulty;
        }

        let mut seeds = SeedSource::new(seed);
        let engine = game::PlayEngine::new(settings.difficulty, seeds.next_seed());

        let mut view = Self {
            settings,
            engine,
            seeds,
            clock: Clock::default(),
            pending_clear: None,
        };
        view.start_clock(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Flip(index) => self.flip(ctx, index),
            Tick => self.engine.tick(),
            ClearRevealed(ticket) => self.clear_revealed(ticket),
            NewGame => {
                log::debug!("new game");
                self.restart(ctx);
                true
            }
            SetDifficulty(difficulty) => {
                log::debug!("difficulty: {}", difficulty);
                self.settings.difficulty = difficulty;
                self.settings.local_save();
                self.restart(ctx);
                true
            }
            Share => {
                self.share();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let observation = self.engine.observe();
        let columns = usize::from(observation.columns());
        let grid = observation.grid();
        let callback = ctx.link().callback(Msg::Flip);

        html! {
            <div class="memento">
                <h1>{"🎴 Memory Game"}</h1>
                {self.view_header(ctx)}
                <table class={classes!(observation.difficulty.name(), observation.status.is_active().then_some("playable"))}>
                    {
                        for grid.outer_iter().enumerate().map(|(row, faces)| html! {
                            <tr>
                                {
                                    for faces.iter().enumerate().map(|(column, &face)| {
                                        let Ok(index) = TileIndex::try_from(row * columns + column) else {
                                            return html! {};
                                        };
                                        let locked = !self.engine.can_flip(index);
                                        let callback = callback.clone();
                                        html! {
                                            <TileView {index} {face} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                {self.view_banner(ctx)}
            </div>
        }
    }
}
