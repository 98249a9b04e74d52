use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use termpong_core::court::{COURT_HEIGHT, COURT_WIDTH};
use termpong_core::{Match, Side};

use crate::theme::Theme;

/// The playing field: walls, net, both paddles and the ball
pub struct CourtWidget<'a> {
    pub game: &'a Match,
}

impl<'a> CourtWidget<'a> {
    pub fn new(game: &'a Match) -> Self {
        Self { game }
    }
}

impl Widget for CourtWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        // Walls take the first and last rows, the field is what remains
        let field = Rect::new(area.x, area.y + 1, area.width, area.height - 2);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Theme::COURT);
                }
            }
        }

        for x in area.left()..area.right() {
            set_cell(buf, x, area.top(), "\u{2580}", Theme::WALL); // ▀
            set_cell(buf, x, area.bottom() - 1, "\u{2584}", Theme::WALL); // ▄
        }

        // Dotted net down the middle
        let net_x = field.x + field.width / 2;
        for y in field.top()..field.bottom() {
            if (y - field.y) % 2 == 0 {
                set_cell(buf, net_x, y, "\u{250a}", Theme::NET); // ┊
            }
        }

        for side in [Side::Left, Side::Right] {
            let paddle = self.game.paddle(side);
            let color = match side {
                Side::Left => Theme::PADDLE_LEFT,
                Side::Right => Theme::PADDLE_RIGHT,
            };
            // Draw half a unit behind the face so the ball meets the edge
            let col = column(paddle.face_x() + side.heading() * 0.5, field);
            let first = row(paddle.top(), field);
            let last = row(paddle.bottom() - f32::EPSILON * COURT_HEIGHT, field);
            for y in first..=last {
                set_cell(buf, col, y, "\u{2588}", color); // █
            }
        }

        let ball = &self.game.ball;
        set_cell(
            buf,
            column(ball.x, field),
            row(ball.y, field),
            "\u{25cf}", // ●
            Theme::BALL,
        );
    }
}

fn column(x: f32, field: Rect) -> u16 {
    field.x + project(x, COURT_WIDTH, field.width)
}

fn row(y: f32, field: Rect) -> u16 {
    field.y + project(y, COURT_HEIGHT, field.height)
}

/// Map a world coordinate in `[0, extent]` onto `span` cells
fn project(value: f32, extent: f32, span: u16) -> u16 {
    let t = (value / extent).clamp(0.0, 1.0);
    ((t * span as f32) as u16).min(span.saturating_sub(1))
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, fg: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_style(Style::default().fg(fg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_clamps_to_span() {
        assert_eq!(project(-3.0, 80.0, 80), 0);
        assert_eq!(project(80.0, 80.0, 80), 79);
        assert_eq!(project(40.0, 80.0, 80), 40);
    }

    #[test]
    fn test_draws_paddles_and_ball() {
        let game = Match::with_seed(3);
        let area = Rect::new(0, 0, 80, 26);
        let mut buf = Buffer::empty(area);
        CourtWidget::new(&game).render(area, &mut buf);

        // Ball rests at the centre of the 24-row field below the top wall
        assert_eq!(buf[(40, 13)].symbol(), "\u{25cf}");
        assert_eq!(buf[(1, 13)].symbol(), "\u{2588}");
        assert_eq!(buf[(78, 13)].symbol(), "\u{2588}");
        assert_eq!(buf[(1, 2)].symbol(), " ");
        assert_eq!(buf[(10, 0)].symbol(), "\u{2580}");
        assert_eq!(buf[(10, 25)].symbol(), "\u{2584}");
    }

    #[test]
    fn test_tiny_area_is_left_alone() {
        let game = Match::with_seed(3);
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        CourtWidget::new(&game).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
