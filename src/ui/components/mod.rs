pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod nav;
pub mod progress_bar;
pub mod skills;

#[cfg(test)]
pub(crate) fn render_to_string<W: ratatui::widgets::Widget>(
    widget: W,
    width: u16,
    height: u16,
) -> String {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
