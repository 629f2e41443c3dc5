use iced::widget::{Space, container, mouse_area};
use iced::{Color, Element, Length};

/// UI events emitted by a backdrop.
#[derive(Debug, Clone)]
pub(crate) enum BackdropEvent {
    Pressed,
}

/// Props for rendering a dismissible backdrop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackdropProps {
    pub(crate) color: Color,
}

/// Render a full-size tinted layer that reports presses.
pub(crate) fn view<'a>(props: BackdropProps) -> Element<'a, BackdropEvent> {
    let color = props.color;
    let layer = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    mouse_area(layer).on_press(BackdropEvent::Pressed).into()
}
