//! Step-by-step "build this app yourself" guide shown next to the example window

use crate::constants::GUIDE_TITLE;
use eframe::egui;
use std::time::Duration;

const GUIDE_DEFAULT_POS: [f32; 2] = [420.0, 40.0];
const GUIDE_DEFAULT_SIZE: [f32; 2] = [620.0, 600.0];

/// How long a Copy button shows "Copied!" and stays disabled
const COPIED_FEEDBACK_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct CodeSnippet {
    pub language: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct GuideStep {
    pub title: &'static str,
    /// Plain text; `backticked` spans are rendered as inline code
    pub description: &'static str,
    pub code: Option<CodeSnippet>,
}

pub const STEPS: &[GuideStep] = &[
    GuideStep {
        title: "Prepare the WSL environment",
        description: "Install a C toolchain plus the OpenGL and windowing headers that `eframe` links against. Run this once in your WSL terminal:",
        code: Some(CodeSnippet {
            language: "bash",
            code: "sudo apt update && sudo apt install -y build-essential curl git pkg-config libgl1-mesa-dev libxkbcommon-dev libwayland-dev libxcursor-dev libxrandr-dev libxi-dev",
        }),
    },
    GuideStep {
        title: "Install the Rust toolchain",
        description: "`rustup` installs `cargo` and `rustc`. Accept the defaults, then restart the shell so `~/.cargo/bin` is on your `PATH`.",
        code: Some(CodeSnippet {
            language: "bash",
            code: "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh",
        }),
    },
    GuideStep {
        title: "Create the project",
        description: "`cargo new` lays out a binary crate with a `Cargo.toml` manifest and `src/main.rs`.",
        code: Some(CodeSnippet {
            language: "bash",
            code: "cargo new my_egui_app\ncd my_egui_app",
        }),
    },
    GuideStep {
        title: "Add the GUI dependency",
        description: "`eframe` bundles the window, the OpenGL renderer and the `egui` widget library. Add it to `Cargo.toml`:",
        code: Some(CodeSnippet {
            language: "toml",
            code: "[dependencies]\neframe = \"0.31\"",
        }),
    },
    GuideStep {
        title: "Write the application",
        description: "Replace `src/main.rs` with the program below. `update` runs every frame and re-declares the whole UI; the counter lives in the app struct so it survives between frames.",
        code: Some(CodeSnippet {
            language: "rust",
            code: r#"use eframe::egui;

#[derive(Default)]
struct HelloApp {
    counter: u64,
}

impl eframe::App for HelloApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::Window::new("Hello, world!").show(ctx, |ui| {
            ui.label("This is some useful text.");
            ui.horizontal(|ui| {
                if ui.button("Click Me").clicked() {
                    self.counter += 1;
                }
                ui.label(format!("counter = {}", self.counter));
            });
        });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.1, 0.1, 0.2, 1.0]
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("My First egui App"),
        ..Default::default()
    };
    eframe::run_native(
        "My First egui App",
        options,
        Box::new(|_cc| Ok(Box::<HelloApp>::default())),
    )
}"#,
        }),
    },
    GuideStep {
        title: "Build the application",
        description: "The first build compiles every dependency and takes a while; later builds are incremental. The binary lands in `target/release`.",
        code: Some(CodeSnippet {
            language: "bash",
            code: "cargo build --release",
        }),
    },
    GuideStep {
        title: "Run your first egui app",
        description: "Thanks to WSLg, Windows displays the Linux window for you. You should see a dark blue window containing a `Hello, world!` panel.",
        code: Some(CodeSnippet {
            language: "bash",
            code: "./target/release/my_egui_app",
        }),
    },
];

/// A piece of a step description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Code(&'a str),
}

/// Split a description into plain text and `backticked` inline code.
///
/// A backtick without a closing partner, or an empty pair, stays literal text.
pub fn split_inline_code(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find('`').map(|i| cursor + i) {
        match text[open + 1..].find('`').map(|i| open + 1 + i) {
            Some(close) if close > open + 1 => {
                if open > text_start {
                    segments.push(Segment::Text(&text[text_start..open]));
                }
                segments.push(Segment::Code(&text[open + 1..close]));
                text_start = close + 1;
                cursor = close + 1;
            }
            Some(_) => cursor = open + 1,
            None => break,
        }
    }

    if text_start < text.len() {
        segments.push(Segment::Text(&text[text_start..]));
    }
    segments
}

/// Which Copy button was pressed last, and when
#[derive(Debug, Default, Clone, Copy)]
pub struct GuideState {
    copied: Option<(usize, f64)>,
}

impl GuideState {
    /// Seconds of "Copied!" feedback left for `step` at time `now`
    fn feedback_left(&self, step: usize, now: f64) -> Option<f64> {
        match self.copied {
            Some((copied_step, at)) if copied_step == step => {
                let left = COPIED_FEEDBACK_SECS - (now - at);
                (left > 0.0).then_some(left)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct GuideOutput {
    /// Copy button rects of the expanded steps
    pub copy_buttons: Vec<(usize, egui::Rect)>,
    /// Step whose code was put on the clipboard this frame
    pub copied: Option<usize>,
}

pub fn guide_window(ctx: &egui::Context, state: &mut GuideState) -> GuideOutput {
    let mut output = GuideOutput::default();
    let now = ctx.input(|i| i.time);

    egui::Window::new(GUIDE_TITLE)
        .default_pos(GUIDE_DEFAULT_POS)
        .default_size(GUIDE_DEFAULT_SIZE)
        .vscroll(true)
        .show(ctx, |ui| {
            for (index, step) in STEPS.iter().enumerate() {
                egui::CollapsingHeader::new(format!("{}. {}", index + 1, step.title))
                    .id_salt(index)
                    .default_open(index == 0)
                    .show(ui, |ui| {
                        description(ui, step.description);
                        if let Some(snippet) = &step.code {
                            code_block(ui, index, snippet, state, now, &mut output);
                        }
                    });
            }
        });

    output
}

fn description(ui: &mut egui::Ui, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in split_inline_code(text) {
            match segment {
                Segment::Text(t) => ui.label(t),
                Segment::Code(c) => ui.code(c),
            };
        }
    });
}

fn code_block(
    ui: &mut egui::Ui,
    index: usize,
    snippet: &CodeSnippet,
    state: &mut GuideState,
    now: f64,
    output: &mut GuideOutput,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(snippet.language.to_uppercase()).small().weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let feedback = state.feedback_left(index, now);
                let label = if feedback.is_some() { "Copied!" } else { "Copy" };
                let button = ui.add_enabled(feedback.is_none(), egui::Button::new(label));
                output.copy_buttons.push((index, button.rect));

                if button.clicked() {
                    ui.ctx().copy_text(snippet.code.to_owned());
                    state.copied = Some((index, now));
                    output.copied = Some(index);
                    ui.ctx()
                        .request_repaint_after(Duration::from_secs_f64(COPIED_FEEDBACK_SECS));
                } else if let Some(left) = feedback {
                    ui.ctx().request_repaint_after(Duration::from_secs_f64(left));
                }
            });
        });
        ui.label(egui::RichText::new(snippet.code).monospace());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: egui::Rect = egui::Rect {
        min: egui::Pos2::ZERO,
        max: egui::Pos2::new(1280.0, 720.0),
    };

    fn run_frame(
        ctx: &egui::Context,
        state: &mut GuideState,
        events: Vec<egui::Event>,
    ) -> (GuideOutput, egui::FullOutput) {
        let input = egui::RawInput {
            screen_rect: Some(SCREEN),
            events,
            ..Default::default()
        };
        let mut output = GuideOutput::default();
        let full = ctx.run(input, |ctx| {
            output = guide_window(ctx, state);
        });
        (output, full)
    }

    fn button_event(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn copy_button(ctx: &egui::Context, state: &mut GuideState, step: usize) -> egui::Pos2 {
        let mut output = GuideOutput::default();
        for _ in 0..3 {
            output = run_frame(ctx, state, Vec::new()).0;
        }
        output
            .copy_buttons
            .iter()
            .find(|(index, _)| *index == step)
            .map(|(_, rect)| rect.center())
            .expect("copy button laid out")
    }

    fn click(
        ctx: &egui::Context,
        state: &mut GuideState,
        pos: egui::Pos2,
    ) -> (GuideOutput, egui::FullOutput) {
        run_frame(ctx, state, vec![egui::Event::PointerMoved(pos)]);
        run_frame(ctx, state, vec![button_event(pos, true)]);
        run_frame(ctx, state, vec![button_event(pos, false)])
    }

    fn copied_texts(full: &egui::FullOutput) -> Vec<&str> {
        full.platform_output
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                egui::OutputCommand::CopyText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn guide_has_seven_steps_with_code() {
        assert_eq!(STEPS.len(), 7);
        for step in STEPS {
            assert!(!step.title.is_empty());
            let snippet = step.code.expect("every step carries a snippet");
            assert!(!snippet.code.trim().is_empty());
        }
    }

    #[test]
    fn inline_code_is_split_out() {
        assert_eq!(
            split_inline_code("Run `cargo build` now"),
            vec![
                Segment::Text("Run "),
                Segment::Code("cargo build"),
                Segment::Text(" now"),
            ]
        );
        assert_eq!(
            split_inline_code("`a``b`"),
            vec![Segment::Code("a"), Segment::Code("b")]
        );
    }

    #[test]
    fn stray_backticks_stay_text() {
        assert_eq!(split_inline_code("no code"), vec![Segment::Text("no code")]);
        assert_eq!(split_inline_code("a ` b"), vec![Segment::Text("a ` b")]);
        assert_eq!(
            split_inline_code("x `` y"),
            vec![Segment::Text("x `` y")]
        );
        assert!(split_inline_code("").is_empty());
    }

    #[test]
    fn copied_feedback_expires() {
        let state = GuideState {
            copied: Some((2, 10.0)),
        };
        assert_eq!(state.feedback_left(2, 10.5), Some(1.5));
        assert_eq!(state.feedback_left(2, 12.0), None);
        assert_eq!(state.feedback_left(1, 10.5), None);
        assert_eq!(GuideState::default().feedback_left(0, 0.0), None);
    }

    #[test]
    fn only_first_step_starts_expanded() {
        let ctx = egui::Context::default();
        let mut state = GuideState::default();
        copy_button(&ctx, &mut state, 0);
        let (output, _) = run_frame(&ctx, &mut state, Vec::new());
        let steps: Vec<usize> = output.copy_buttons.iter().map(|(i, _)| *i).collect();
        assert_eq!(steps, vec![0]);
    }

    #[test]
    fn copy_button_puts_code_on_clipboard() {
        let ctx = egui::Context::default();
        let mut state = GuideState::default();
        let pos = copy_button(&ctx, &mut state, 0);

        let (output, full) = click(&ctx, &mut state, pos);
        assert_eq!(output.copied, Some(0));
        assert_eq!(copied_texts(&full), vec![STEPS[0].code.unwrap().code]);
    }

    #[test]
    fn copy_button_is_disabled_while_showing_feedback() {
        let ctx = egui::Context::default();
        let mut state = GuideState::default();
        let pos = copy_button(&ctx, &mut state, 0);

        click(&ctx, &mut state, pos);
        let (output, full) = click(&ctx, &mut state, pos);
        assert_eq!(output.copied, None);
        assert!(copied_texts(&full).is_empty());
    }
}
