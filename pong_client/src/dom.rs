//! DOM element lookup and label updates

use crate::error::ClientError;
use pong_core::{Score, SpeedMultiplier};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement};

pub const SPEED_RANGE_ID: &str = "speedRange";
pub const SPEED_VALUE_ID: &str = "speedValue";
pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const AI_SCORE_ID: &str = "aiScore";

/// Elements the game reads from or writes to
pub struct Dom {
    pub canvas: HtmlCanvasElement,
    pub speed_range: HtmlInputElement,
    pub speed_value: Element,
    pub player_score: Element,
    pub ai_score: Element,
}

impl Dom {
    pub fn lookup(document: &Document, canvas_id: &str) -> Result<Self, ClientError> {
        Ok(Self {
            canvas: typed_element(document, canvas_id)?,
            speed_range: typed_element(document, SPEED_RANGE_ID)?,
            speed_value: element(document, SPEED_VALUE_ID)?,
            player_score: element(document, PLAYER_SCORE_ID)?,
            ai_score: element(document, AI_SCORE_ID)?,
        })
    }

    /// Current speed control value, falling back to the default on bad input
    pub fn read_speed(&self) -> SpeedMultiplier {
        match SpeedMultiplier::parse(&self.speed_range.value()) {
            Ok(speed) => speed,
            Err(e) => {
                log::warn!("{}, using default", e);
                SpeedMultiplier::default()
            }
        }
    }

    pub fn show_speed(&self, speed: SpeedMultiplier) {
        self.speed_value.set_text_content(Some(&speed.to_string()));
    }

    pub fn show_score(&self, score: &Score) {
        self.player_score
            .set_text_content(Some(&score.player_label()));
        self.ai_score.set_text_content(Some(&score.opponent_label()));
    }
}

fn element(document: &Document, id: &str) -> Result<Element, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))
}

fn typed_element<T: JsCast>(document: &Document, id: &str) -> Result<T, ClientError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElementType(id.to_string()))
}
