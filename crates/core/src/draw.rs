//! Draw list - a host-agnostic description of one frame.
//!
//! The core never touches pixels. [`GameState::draw_into`](crate::GameState::draw_into)
//! fills a reusable [`DrawList`] that the host replays onto its render surface.

use std::fmt::Write as _;

use crate::types::{Rect, Sprite};

/// Text the core asks the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Current score, in half points
    Score(u32),
    GameOver,
}

impl Label {
    /// Append the label text to `out`.
    ///
    /// Scores print like a plain number: `0`, `0.5`, `1`, `1.5`, ...
    pub fn write_into(&self, out: &mut String) {
        match *self {
            Label::Score(halves) => {
                let _ = write!(out, "{}", halves / 2);
                if halves % 2 == 1 {
                    out.push_str(".5");
                }
            }
            Label::GameOver => out.push_str("GAME OVER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Sprite { sprite: Sprite, rect: Rect },
    Text { label: Label, x: f32, y: f32 },
}

/// Reusable list of draw commands, in paint order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn sprites(&self, sprite: Sprite) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Sprite { sprite: s, rect } if *s == sprite => Some(*rect),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(label: Label) -> String {
        let mut s = String::new();
        label.write_into(&mut s);
        s
    }

    #[test]
    fn score_label_formats_half_points() {
        assert_eq!(text(Label::Score(0)), "0");
        assert_eq!(text(Label::Score(1)), "0.5");
        assert_eq!(text(Label::Score(2)), "1");
        assert_eq!(text(Label::Score(7)), "3.5");
        assert_eq!(text(Label::Score(40)), "20");
    }

    #[test]
    fn game_over_label() {
        assert_eq!(text(Label::GameOver), "GAME OVER");
    }

    #[test]
    fn sprites_filters_by_kind() {
        let mut list = DrawList::new();
        list.push(DrawCommand::Clear(Rect::new(0.0, 0.0, 1.0, 1.0)));
        list.push(DrawCommand::Sprite {
            sprite: Sprite::Bird,
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
        });
        list.push(DrawCommand::Sprite {
            sprite: Sprite::TopPipe,
            rect: Rect::new(5.0, 6.0, 7.0, 8.0),
        });

        let birds: Vec<Rect> = list.sprites(Sprite::Bird).collect();
        assert_eq!(birds, vec![Rect::new(1.0, 2.0, 3.0, 4.0)]);
        assert_eq!(list.sprites(Sprite::BottomPipe).count(), 0);

        list.clear();
        assert!(list.is_empty());
    }
}
