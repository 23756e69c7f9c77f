//! Slide scenes, layers and behaviors

use stagecraft::prelude::*;
use std::time::Duration;

/// Frame border drawn behind every slide
pub struct BackdropLayer;

impl Layer for BackdropLayer {
    fn name(&self) -> &str {
        "backdrop"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        let size = ctx.surface();
        let width = size.width as i32;
        let height = size.height as i32;
        let edge: String = "-".repeat(size.width as usize);

        ctx.draw_text(CellPos::new(0, 0), &edge, TextStyle::default())?;
        ctx.draw_text(CellPos::new(0, height - 1), &edge, TextStyle::default())?;
        for y in 1..height - 1 {
            let bar = TileVisual {
                glyph: '|',
                ..TileVisual::default()
            };
            ctx.draw_tile(CellPos::new(0, y), bar)?;
            ctx.draw_tile(CellPos::new(width - 1, y), bar)?;
        }
        Ok(())
    }
}

/// Horizontally centered block of text lines
pub struct TextBlockLayer {
    lines: Vec<String>,
    top: i32,
}

impl TextBlockLayer {
    /// Block starting at row `top`
    pub fn new<L: Into<String>>(top: i32, lines: impl IntoIterator<Item = L>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            top,
        }
    }
}

impl Layer for TextBlockLayer {
    fn name(&self) -> &str {
        "text-block"
    }

    fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        let width = ctx.surface().width as i32;
        for (i, line) in self.lines.iter().enumerate() {
            let x = (width - line.chars().count() as i32) / 2;
            ctx.draw_text(
                CellPos::new(x.max(1), self.top + i as i32),
                line,
                TextStyle::default(),
            )?;
        }
        Ok(())
    }
}

/// Global bottom-row bar showing the frame number and fps
///
/// Registered as a global layer, so it stays on screen during
/// transitions.
pub struct StatusBarLayer;

impl Layer for StatusBarLayer {
    fn name(&self) -> &str {
        "status-bar"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        let frame = ctx.frame();
        let text = format!(" frame {} | {:.0} fps ", frame.frame_number, frame.fps);
        let y = ctx.surface().height as i32 - 1;
        ctx.draw_text(CellPos::new(1, y), &text, TextStyle::default())
    }
}

/// How a slide hands over to the next one
enum SlideEffect {
    Fade,
    Push,
}

struct NextSlide {
    target: &'static str,
    effect: SlideEffect,
}

impl NextSlide {
    fn request(&self) -> SwitchRequest {
        match self.effect {
            SlideEffect::Fade => SwitchRequest::with_effect(
                self.target,
                Duration::from_millis(350),
                FadeTransition::new(Color::WHITE, FadeDirection::InOut),
            ),
            SlideEffect::Push => SwitchRequest::with_effect(
                self.target,
                Duration::from_millis(300),
                PushTransition::new(PushDirection::FromRight),
            ),
        }
    }
}

/// Behavior shared by every slide
///
/// Space or the right arrow advances to the next slide (once per
/// activation); escape shuts the show down.
pub struct SlideBehavior {
    next: Option<NextSlide>,
    advanced: bool,
}

impl SlideBehavior {
    fn advancing_to(next: NextSlide) -> Self {
        Self {
            next: Some(next),
            advanced: false,
        }
    }

    fn terminal() -> Self {
        Self {
            next: None,
            advanced: false,
        }
    }
}

impl SceneBehavior for SlideBehavior {
    fn on_activate(&mut self) {
        self.advanced = false;
    }

    fn on_update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), EngineError> {
        if ctx.input().was_pressed(KeyCode::Escape) {
            log::info!("Escape pressed, shutting down");
            ctx.request_shutdown();
            return Ok(());
        }

        if self.advanced {
            return Ok(());
        }
        let advance = ctx.input().was_pressed(KeyCode::Space)
            || ctx.input().was_pressed(KeyCode::Right);
        if advance {
            if let Some(next) = &self.next {
                ctx.request_switch(next.request());
                self.advanced = true;
            }
        }
        Ok(())
    }
}

/// Register the three slides and the global status bar
pub fn build_scenes(manager: &mut SceneManager) -> Result<(), EngineError> {
    manager.register_scene(title_scene())?;
    manager.register_scene(bullets_scene())?;
    manager.register_scene(outro_scene())?;
    manager.add_global_layer(shared_layer(StatusBarLayer));
    Ok(())
}

fn title_scene() -> Scene {
    let mut scene = Scene::with_behavior(
        "title",
        SlideBehavior::advancing_to(NextSlide {
            target: "bullets",
            effect: SlideEffect::Fade,
        }),
    );
    scene.add_layer(shared_layer(BackdropLayer));
    scene.add_layer(shared_layer(TextBlockLayer::new(
        6,
        [
            "S T A G E C R A F T",
            "",
            "a text-mode slideshow",
            "",
            "press space",
        ],
    )));
    scene
}

fn bullets_scene() -> Scene {
    let mut scene = Scene::with_behavior(
        "bullets",
        SlideBehavior::advancing_to(NextSlide {
            target: "outro",
            effect: SlideEffect::Push,
        }),
    );
    scene.add_layer(shared_layer(BackdropLayer));
    scene.add_layer(shared_layer(TextBlockLayer::new(
        3,
        [
            "SCENES AND LAYERS",
            "",
            "layers draw in priority order",
            "scenes swap with fade and push",
            "the status bar rides along globally",
            "",
            "press space",
        ],
    )));
    scene
}

fn outro_scene() -> Scene {
    let mut scene = Scene::with_behavior("outro", SlideBehavior::terminal());
    scene.add_layer(shared_layer(BackdropLayer));
    scene.add_layer(shared_layer(TextBlockLayer::new(
        7,
        ["THE END", "", "press escape"],
    )));
    scene
}
