use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use runtime::logging::{self, InMemoryRunLogWriter};
use runtime::{clock, GameSession, SessionEvent};
use tokio::time::{interval, MissedTickBehavior};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GameAction {
    Buy,
    Sell,
    Reset,
    Payout,
}

pub async fn game_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| run_game(socket, state))
}

// One task owns the session, so ticks and button presses are applied in the
// order they arrive; dropping the task cancels the interval with it.
async fn run_game(mut socket: WebSocket, state: AppState) {
    let Ok(session_id) = state.start_session() else {
        return;
    };
    let config = state.config();
    let seed = state.session_seed(session_id, clock::epoch_ms_now() as u64);
    let mut session = GameSession::new(seed, config.ticker);
    let mut run_log = InMemoryRunLogWriter::new();

    let connected = SessionEvent::connected(session_id);
    logging::record(&mut run_log, &connected);
    if send_event(&mut socket, &connected).await.is_err() {
        return;
    }

    let mut ticks = interval(Duration::from_millis(config.ticker.tick_interval_ms));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                let event = session.step_once(clock::epoch_ms_now());
                logging::record(&mut run_log, &event);
                if send_event(&mut socket, &event).await.is_err() {
                    return;
                }
            }
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => return,
                    Some(Ok(Message::Text(text))) => {
                        let Some(event) = apply_action(&mut session, &text) else {
                            continue;
                        };
                        logging::record(&mut run_log, &event);
                        if send_event(&mut socket, &event).await.is_err() {
                            return;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) => return,
                }
            }
        }
    }
}

fn apply_action(session: &mut GameSession, text: &str) -> Option<SessionEvent> {
    let action: GameAction = serde_json::from_str(text).ok()?;

    Some(match action {
        GameAction::Buy => session.buy(),
        GameAction::Sell => session.sell(),
        GameAction::Reset => session.reset(),
        GameAction::Payout => session.payout(),
    })
}

async fn send_event(socket: &mut WebSocket, event: &SessionEvent) -> Result<(), ()> {
    let payload = serde_json::to_string(event).map_err(|_| ())?;
    socket.send(Message::Text(payload)).await.map_err(|_| ())
}
