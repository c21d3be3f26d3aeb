use ratatui::{prelude::*, widgets::*};

use crate::models::Group;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner animation frame for the given UI tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()]
}

/// Flatten the grouped list into renderable lines: one highlighted
/// header row per group, followed by its items
pub fn group_lines(groups: &[Group]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(Line::from(Span::styled(
            format!(" Group {} ", group.name),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        )));
        for item in &group.items {
            lines.push(Line::from(Span::raw(format!("   {}", item.name))));
        }
    }
    lines
}

/// The group whose header or items occupy the given rendered line
pub fn group_at_line(groups: &[Group], line: usize) -> Option<&Group> {
    let mut offset = 0;
    for group in groups {
        let span = 1 + group.items.len();
        if line < offset + span {
            return Some(group);
        }
        offset += span;
    }
    groups.last()
}

/// Centered paragraph used by the loading and error screens
pub fn centered_text<'a>(lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupItem;

    fn groups() -> Vec<Group> {
        vec![
            Group {
                id: 1,
                name: "1".into(),
                items: vec![GroupItem { id: 1, name: "Item 1".into() }],
            },
            Group {
                id: 2,
                name: "2".into(),
                items: vec![
                    GroupItem { id: 2, name: "Item 2".into() },
                    GroupItem { id: 4, name: "Item 4".into() },
                ],
            },
        ]
    }

    #[test]
    fn one_line_per_header_and_item() {
        assert_eq!(group_lines(&groups()).len(), 5);
    }

    #[test]
    fn group_at_line_tracks_scroll_position() {
        let groups = groups();
        assert_eq!(group_at_line(&groups, 0).unwrap().id, 1);
        assert_eq!(group_at_line(&groups, 1).unwrap().id, 1);
        assert_eq!(group_at_line(&groups, 2).unwrap().id, 2);
        assert_eq!(group_at_line(&groups, 4).unwrap().id, 2);
        // Past the end clamps to the last group
        assert_eq!(group_at_line(&groups, 99).unwrap().id, 2);
        assert!(group_at_line(&[], 0).is_none());
    }
}
