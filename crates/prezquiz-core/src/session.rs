//! The quiz session state machine.
//!
//! One session owns the mutable state of a run: the pool of orders not
//! yet asked this round, the outstanding question, and the score. The
//! turn cycle is Ready -> AwaitingAnswer -> Scored -> Ready, until the
//! session reaches Finished (end-early exhaustion or end of input).
//!
//! Randomness comes in through `rand::Rng` so tests can seed a `StdRng`
//! and assert selection-without-replacement behavior.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{normalize, Entity, EntityCatalog};
use crate::config::{Mode, SessionConfig, Verbosity};
use crate::error::QuizError;
use crate::statistics::{QuizStatistics, SessionSummary};
use crate::traits::QuizIo;

/// What a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Given the order number, name the president.
    Name,
    /// Given the president, give the order number.
    Order,
    /// Given the president, give the inauguration year.
    Year,
}

const ALL_KINDS: [QuestionKind; 3] = [QuestionKind::Name, QuestionKind::Order, QuestionKind::Year];

// For entities whose display name maps to several orders (Cleveland,
// Trump) an order-from-name question cannot pin a single answer, so
// that kind is never posed for them.
const UNAMBIGUOUS_CUE_KINDS: [QuestionKind; 2] = [QuestionKind::Name, QuestionKind::Year];

/// One outstanding question: a target order and what is asked about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub order: u32,
    pub kind: QuestionKind,
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub question: Question,
    pub correct: bool,
}

/// Turn-cycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    AwaitingAnswer,
    Scored,
    Finished,
}

/// Mutable state of one quiz run. Single-owner, single-threaded.
pub struct QuizSession<'a> {
    catalog: &'a EntityCatalog,
    config: SessionConfig,
    pool: Vec<u32>,
    asked_this_round: Vec<u32>,
    current: Option<Question>,
    stats: QuizStatistics,
    state: SessionState,
}

impl<'a> QuizSession<'a> {
    /// Create a session over a shared catalog. The range is re-checked
    /// against this catalog's size.
    pub fn new(catalog: &'a EntityCatalog, config: SessionConfig) -> Result<Self, QuizError> {
        if config.range.end() > catalog.max_order() {
            return Err(QuizError::InvalidRange {
                start: config.range.start(),
                end: config.range.end(),
                max: catalog.max_order(),
            });
        }
        Ok(Self {
            catalog,
            config,
            pool: config.range.orders().collect(),
            asked_this_round: Vec::new(),
            current: None,
            stats: QuizStatistics::default(),
            state: SessionState::Ready,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn statistics(&self) -> &QuizStatistics {
        &self.stats
    }

    /// Ready -> AwaitingAnswer. Picks a uniformly random order and kind.
    /// Returns `None` once the session is finished, or out of turn.
    pub fn select_question<R: Rng>(&mut self, rng: &mut R) -> Option<Question> {
        if self.state != SessionState::Ready {
            return None;
        }

        let order = match self.config.mode {
            Mode::Repeat => {
                // Pool is not consumed; any order may repeat freely.
                rng.gen_range(self.config.range.start()..=self.config.range.end())
            }
            Mode::Normal | Mode::EndEarly => {
                if self.pool.is_empty() {
                    if self.config.mode == Mode::EndEarly {
                        self.state = SessionState::Finished;
                        return None;
                    }
                    tracing::info!("pool exhausted, starting a new round");
                    self.pool = self.config.range.orders().collect();
                    self.asked_this_round.clear();
                }
                let idx = rng.gen_range(0..self.pool.len());
                let picked = self.pool.swap_remove(idx);
                self.asked_this_round.push(picked);
                picked
            }
        };

        let entity = self.entity(order);
        let kinds: &[QuestionKind] = if self.catalog.is_ambiguous(&entity.name) {
            &UNAMBIGUOUS_CUE_KINDS
        } else {
            &ALL_KINDS
        };
        let kind = *kinds.choose(rng).unwrap_or(&QuestionKind::Name);

        let question = Question { order, kind };
        tracing::debug!(?question, remaining = self.pool.len(), "selected question");
        self.current = Some(question);
        self.state = SessionState::AwaitingAnswer;
        Some(question)
    }

    /// AwaitingAnswer -> Scored. Malformed or empty input is simply
    /// incorrect, never an error.
    pub fn submit_answer(&mut self, raw: &str) -> Option<Verdict> {
        if self.state != SessionState::AwaitingAnswer {
            return None;
        }
        let question = self.current?;
        let correct = self.check_answer(question, raw);
        self.stats.record(question.kind, correct);
        self.state = SessionState::Scored;
        tracing::debug!(?question, correct, answer = raw, "scored answer");
        Some(Verdict { question, correct })
    }

    /// Scored -> Ready, or Finished when end-early has drained the pool.
    pub fn advance(&mut self) -> SessionState {
        if self.state == SessionState::Scored {
            self.current = None;
            self.state = if self.config.mode == Mode::EndEarly && self.pool.is_empty() {
                SessionState::Finished
            } else {
                SessionState::Ready
            };
        }
        self.state
    }

    /// Side-effect-free score check for a question. Name answers go
    /// through ambiguity-aware resolution; a full-name match against the
    /// pinned target is always accepted. Order and year answers require
    /// exact integer equality after trimming.
    pub fn check_answer(&self, question: Question, raw: &str) -> bool {
        let entity = self.entity(question.order);
        match question.kind {
            QuestionKind::Name => {
                self.catalog
                    .resolve_name(raw, self.config.allow_ambiguity)
                    .contains(&question.order)
                    || normalize(raw) == normalize(&entity.name)
            }
            QuestionKind::Order => raw.trim().parse::<u32>().ok() == Some(question.order),
            QuestionKind::Year => raw.trim().parse::<i32>().ok() == Some(entity.year),
        }
    }

    /// Consistent snapshot of the score so far. Does not terminate the
    /// session and may be called in any state.
    pub fn finalize(&self) -> SessionSummary {
        self.stats.summary()
    }

    /// End the session from outside the turn cycle (end of input).
    pub fn stop(&mut self) {
        self.state = SessionState::Finished;
    }

    /// Drive the full question/answer/feedback cycle until the session
    /// finishes or the input ends.
    pub fn run<R: Rng>(
        &mut self,
        io: &mut dyn QuizIo,
        rng: &mut R,
    ) -> anyhow::Result<SessionSummary> {
        loop {
            let Some(question) = self.select_question(rng) else {
                break;
            };
            io.report(
                Verbosity::Normal,
                &format!("Question {}:", self.stats.total + 1),
            );
            io.prompt(&self.render_prompt(question));
            let Some(line) = io.read_line()? else {
                self.stop();
                break;
            };
            let Some(verdict) = self.submit_answer(&line) else {
                break;
            };
            self.emit_feedback(io, verdict);
            if self.advance() == SessionState::Finished {
                io.report(Verbosity::Normal, "All presidents have been asked! Ending.");
                break;
            }
        }
        Ok(self.finalize())
    }

    fn render_prompt(&self, question: Question) -> String {
        let entity = self.entity(question.order);
        match question.kind {
            QuestionKind::Name => {
                format!("President #{}: who was the president? ", question.order)
            }
            QuestionKind::Order => {
                format!("{}: what was their order number? ", entity.name)
            }
            QuestionKind::Year => {
                format!(
                    "{} (#{}): what year did their term begin? ",
                    entity.name, question.order
                )
            }
        }
    }

    fn emit_feedback(&self, io: &mut dyn QuizIo, verdict: Verdict) {
        if verdict.correct {
            io.report(Verbosity::Normal, "Correct!");
        } else {
            io.report(Verbosity::Normal, "Wrong!");
            io.report(
                Verbosity::Verbose,
                &format!(
                    "The correct answer is {}.",
                    self.expected_answer(verdict.question)
                ),
            );
        }
    }

    fn expected_answer(&self, question: Question) -> String {
        let entity = self.entity(question.order);
        match question.kind {
            QuestionKind::Name => entity.name.clone(),
            QuestionKind::Order => question.order.to_string(),
            QuestionKind::Year => entity.year.to_string(),
        }
    }

    fn entity(&self, order: u32) -> &Entity {
        // Orders always come from the validated range.
        self.catalog
            .get(order)
            .unwrap_or_else(|| &self.catalog.entities()[0])
    }
}
