//! Manual scoreboard.

use leptos::prelude::*;

use crate::content::PLAYER_LABELS;
use crate::state::scoreboard::{Player, ScoreAction, Scoreboard};

#[component]
pub fn ScoreboardWidget() -> impl IntoView {
    let board = RwSignal::new(Scoreboard::default());
    let apply = move |action: ScoreAction| board.update(|b| b.apply(action));

    let on_label_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let index = PLAYER_LABELS.iter().position(|label| *label == value).unwrap_or(0);
        board.update(|b| b.set_label_index(index));
    };

    let player_column = move |player: Player, id: &'static str, title: &'static str| {
        let inc = ScoreAction::Increment(player);
        let dec = ScoreAction::Decrement(player);
        view! {
            <div class="scoreboard__player">
                <h3>{title}</h3>
                <output id=id class="scoreboard__value" aria-live="polite">
                    {move || board.get().score(player)}
                </output>
                <div class="scoreboard__buttons">
                    <button data-action=dec.data_action() aria-label=format!("Decrease {title}") on:click=move |_| apply(dec)>
                        "−"
                    </button>
                    <button data-action=inc.data_action() aria-label=format!("Increase {title}") on:click=move |_| apply(inc)>
                        "+"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="scoreboard">
            <label class="scoreboard__label">
                "Playing: "
                <select
                    id="playerName"
                    prop:value=move || PLAYER_LABELS.get(board.get().label_index()).copied().unwrap_or(PLAYER_LABELS[0])
                    on:change=on_label_change
                >
                    {PLAYER_LABELS.iter().map(|label| view! { <option value=*label>{*label}</option> }).collect_view()}
                </select>
            </label>
            <div class="scoreboard__scores">
                {player_column(Player::A, "scoreA", "Player A")}
                {player_column(Player::B, "scoreB", "Player B")}
            </div>
            <div class="scoreboard__actions">
                <button id="resetScore" class="btn" on:click=move |_| apply(ScoreAction::Reset)>"Reset"</button>
                <button id="swapPlayers" class="btn" on:click=move |_| apply(ScoreAction::Swap)>"Swap"</button>
            </div>
        </div>
    }
}
