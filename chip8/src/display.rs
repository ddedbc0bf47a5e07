use chip8_core::constants::DISPLAY_WIDTH;
use chip8_core::state::FrameBuffer;

const ON: char = '#';
const OFF: char = '.';

/// Formats a Chip-8 FrameBuffer as text, one line per row, for dumping to a terminal.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn render(frame: &FrameBuffer) -> String {
    frame
        .chunks(DISPLAY_WIDTH)
        .map(|row| {
            row.iter()
                .map(|&pixel| if pixel == 1 { ON } else { OFF })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_core::constants::DISPLAY_HEIGHT;

    #[test]
    fn test_render_frame() {
        let mut frame: FrameBuffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        frame[0..2].copy_from_slice(&[0, 1]);
        frame[DISPLAY_WIDTH..DISPLAY_WIDTH + 2].copy_from_slice(&[1, 0]);
        let text = render(&frame);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT);
        assert!(lines.iter().all(|line| line.len() == DISPLAY_WIDTH));
        assert!(lines[0].starts_with(".#."));
        assert!(lines[1].starts_with("#.."));
        assert_eq!(lines[2], ".".repeat(DISPLAY_WIDTH));
    }
}
