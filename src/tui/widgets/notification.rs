//! Toast notification widget
//!
//! Short messages drawn over the top-right corner. They count down in event
//! loop ticks rather than wall time, so tests can expire them directly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Ticks a toast stays up unless overridden
pub const DEFAULT_TOAST_TICKS: u16 = 12;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Check your input",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// Ticks left before it disappears
    pub ticks_left: u16,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            ticks_left: DEFAULT_TOAST_TICKS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_left == 0
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Area in the top-right corner of `frame` sized for the message
    pub fn area(&self, frame: Rect) -> Rect {
        let chars = u16::try_from(self.notification.message.chars().count()).unwrap_or(u16::MAX);
        let width = chars.saturating_add(4).clamp(24, 48).min(frame.width);
        let lines = (chars / width.saturating_sub(4).max(1)).saturating_add(1);
        let height = lines.saturating_add(2).min(frame.height);
        Rect::new(
            frame.x + frame.width.saturating_sub(width + 1),
            frame.y + 1,
            width,
            height,
        )
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let title = self.notification.notification_type.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Count down the visible toast and drop it once expired
    pub fn tick(&mut self) {
        if let Some(first) = self.notifications.first_mut() {
            first.ticks_left = first.ticks_left.saturating_sub(1);
        }
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The toast to show now
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("First"));
    }

    #[test]
    fn test_tick_expires_only_the_visible_toast() {
        let mut queue = NotificationQueue::new();
        let mut short = Notification::warning("Fix 2 fields");
        short.ticks_left = 2;
        queue.push(short);
        queue.push(Notification::info("Next"));

        queue.tick();
        assert_eq!(queue.len(), 2);
        queue.tick();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("Next"));
        assert_eq!(queue.current().map(|n| n.ticks_left), Some(DEFAULT_TOAST_TICKS));
    }

    #[test]
    fn test_area_stays_inside_frame() {
        let n = Notification::error("x".repeat(200));
        let frame = Rect::new(0, 0, 40, 10);
        let area = NotificationWidget::new(&n).area(frame);
        assert!(area.right() <= frame.right());
        assert!(area.bottom() <= frame.bottom());
    }

    #[test]
    fn test_area_handles_huge_message() {
        let n = Notification::error("x".repeat(70_000));
        let frame = Rect::new(0, 0, 80, 24);
        let area = NotificationWidget::new(&n).area(frame);
        assert_eq!(area.width, 48);
        assert_eq!(area.height, 24);
    }
}
