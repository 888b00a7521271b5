//! 2D canvas sink for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement};

use super::{RenderSink, StatsSink, outcome_text};
use crate::consts::*;
use crate::error::{Result, SkirmishError};
use crate::sim::{Outcome, Sprite, WorldSnapshot};

const END_FONT: &str = "76px Georgia";

pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
    hp_bar: Option<HtmlElement>,
    frame_label: Option<Element>,
}

impl CanvasSink {
    /// Bind to the canvas and (optional) stat widgets by element id
    pub fn from_document(document: &Document, canvas_id: &str, hp_id: &str, frame_id: &str) -> Result<Self> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SkirmishError::Platform(format!("no element #{canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SkirmishError::Platform(format!("#{canvas_id} is not a canvas")))?;
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SkirmishError::Platform(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| SkirmishError::Platform("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SkirmishError::Platform("unexpected context type".to_string()))?;

        let hp_bar = document
            .get_element_by_id(hp_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if hp_bar.is_none() {
            log::warn!("No #{hp_id} element, hp bar disabled");
        }

        Ok(Self {
            ctx,
            hp_bar,
            frame_label: document.get_element_by_id(frame_id),
        })
    }

    fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
    }

    fn fill(&self, sprite: &Sprite) {
        let r = sprite.rect;
        self.ctx.set_fill_style_str(sprite.color);
        self.ctx
            .fill_rect(r.pos.x as f64, r.pos.y as f64, r.size.x as f64, r.size.y as f64);
    }
}

impl RenderSink for CanvasSink {
    fn draw(&mut self, snapshot: &WorldSnapshot) {
        self.clear();

        self.ctx.set_stroke_style_str(OBSTACLE_COLOR);
        for ob in &snapshot.obstacles {
            self.ctx.begin_path();
            self.ctx.move_to(ob.x_start as f64, ob.y as f64);
            self.ctx.line_to(ob.x_end as f64, ob.y as f64);
            self.ctx.stroke();
        }

        for enemy in &snapshot.enemies {
            self.fill(enemy);
        }
        for shot in &snapshot.shots {
            self.fill(&shot.sprite);
        }
        self.fill(&snapshot.character.sprite);
    }

    fn draw_outcome(&mut self, outcome: Outcome) {
        self.clear();
        self.ctx.set_font(END_FONT);
        self.ctx.set_fill_style_str(match outcome {
            Outcome::Win => "green",
            Outcome::Loss => "red",
        });
        let x = WORLD_WIDTH as f64 / 2.0 - 150.0;
        let y = WORLD_HEIGHT as f64 / 2.0;
        if let Err(e) = self.ctx.fill_text(outcome_text(outcome), x, y) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}

impl StatsSink for CanvasSink {
    fn update_stats(&mut self, hp_percent: u32, frame_count: u64) {
        if let Some(bar) = &self.hp_bar {
            let _ = bar.style().set_property("width", &format!("{hp_percent}%"));
        }
        if let Some(label) = &self.frame_label {
            label.set_text_content(Some(&frame_count.to_string()));
        }
    }
}
