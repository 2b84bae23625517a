use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    Steps(i64),
    Place(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: usize,
    pub to: usize,
    pub steps: i64,
    pub passed_go: bool,
    pub collected: bool,
}

/// Forward distance from `current` to `target`; never negative.
pub fn steps_to(current: usize, target: usize, board_len: usize) -> i64 {
    ((target + board_len - current % board_len) % board_len) as i64
}

pub fn advance(position: usize, steps: i64, board_len: usize) -> (usize, i64) {
    let len = board_len as i64;
    let total = position as i64 + steps;
    (total.rem_euclid(len) as usize, total.div_euclid(len))
}

impl Game {
    pub fn move_player(
        &mut self,
        id: PlayerId,
        destination: Destination<'_>,
        collect: bool,
    ) -> Result<MoveOutcome, GameError> {
        let board_len = self.board.len();
        let from = self.player(id)?.position;
        let steps = match destination {
            Destination::Steps(steps) => steps,
            Destination::Place(name) => steps_to(from, self.board.index_of(name)?, board_len),
        };

        let (to, laps) = advance(from, steps, board_len);
        let passed_go = laps > 0;
        let collected = passed_go && collect;

        let player = self.player_mut(id)?;
        player.position = to;
        let name = player.name.clone();
        self.push_event(GameEvent::Moved {
            player: name.clone(),
            from,
            to,
            passed_go,
        });

        if collected {
            let amount = self.settings.collect_from_go;
            self.alter_balance(id, amount)?;
            self.push_event(GameEvent::CollectedGo {
                player: name,
                amount,
            });
        }

        Ok(MoveOutcome {
            from,
            to,
            steps,
            passed_go,
            collected,
        })
    }

    pub fn arrest_player(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.move_player(id, Destination::Place(Square::Jail.name()), false)?;
        let name = self.player(id)?.name.clone();
        self.push_event(GameEvent::Arrested { player: name });
        Ok(())
    }
}
