use slide_confirm::{
    SlideLabel,
    render::{IndicatorContent, SlideConfirmView, ViewRenderer},
    slide_confirm::LabelAnchor,
};

const TRACK: char = '·';
const KNOB: char = '#';
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Renders a control as one line of text, `dp_per_cell` dp per character.
#[derive(Debug)]
pub struct TextRenderer {
    dp_per_cell: f32,
    frame: usize,
}

impl TextRenderer {
    /// Creates a renderer with the given horizontal resolution.
    pub fn new(dp_per_cell: f32) -> Self {
        Self {
            dp_per_cell: dp_per_cell.max(1.0),
            frame: 0,
        }
    }

    fn cell(&self, dp: f32) -> usize {
        (dp.max(0.0) / self.dp_per_cell).round() as usize
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl<L: SlideLabel> ViewRenderer<L> for TextRenderer {
    type Output = String;

    fn render(&mut self, view: &SlideConfirmView<'_, L>) -> String {
        self.frame += 1;
        let width = self.cell(view.track.width);
        let mut cells = vec![TRACK; width];

        // Faded below a third of full opacity counts as invisible.
        let label = view.label.content.accessibility_text();
        if view.label.opacity > 0.33 {
            let text: Vec<char> = label.chars().collect();
            let frame_x = self.cell(view.label.frame.x);
            let frame_width = self.cell(view.label.frame.width);
            let len = text.len().min(frame_width);
            let start = frame_x
                + match view.label.frame.anchor {
                    LabelAnchor::Start => 0,
                    LabelAnchor::Center => (frame_width - len) / 2,
                    LabelAnchor::End => frame_width - len,
                };
            let hidden = view
                .label
                .mask
                .map_or(0, |mask| self.cell(mask.hidden_width));

            let block = self.cell(view.physical_x(
                start as f32 * self.dp_per_cell,
                len as f32 * self.dp_per_cell,
            ));

            for (i, ch) in text.iter().take(len).enumerate() {
                let x = block + i;
                let leading = if view.mirrored {
                    width.saturating_sub(x + 1)
                } else {
                    x
                };
                if leading < hidden {
                    continue;
                }
                if let Some(cell) = cells.get_mut(x) {
                    *cell = if view.label.shimmer && (i + self.frame) % 4 == 0 {
                        '*'
                    } else {
                        *ch
                    };
                }
            }
        }

        let knob_x = self.cell(view.physical_x(view.indicator.x, view.indicator.size));
        let knob_width = self.cell(view.indicator.size).max(1);
        for cell in cells.iter_mut().skip(knob_x).take(knob_width) {
            *cell = KNOB;
        }
        let glyph = match view.indicator.content {
            IndicatorContent::Spinner => SPINNER[self.frame % SPINNER.len()],
            IndicatorContent::Icon(icon) => match icon.name() {
                "chevron.right" if view.mirrored => '<',
                "chevron.right" => '>',
                "xmark" => 'x',
                _ => '?',
            },
        };
        if let Some(cell) = cells.get_mut(knob_x + knob_width / 2) {
            *cell = glyph;
        }

        let line: String = cells.into_iter().collect();
        format!(
            "[{line}] {:?}{}",
            view.phase,
            if view.enabled { "" } else { " (disabled)" }
        )
    }
}

#[cfg(test)]
mod tests {
    use slide_confirm::{ConfirmAction, Environment, LayoutDirection, SlideConfirm};

    use super::*;

    #[test]
    fn idle_frame() {
        let button = SlideConfirm::new("Go", ConfirmAction::default());
        let mut renderer = TextRenderer::new(10.0);
        let line = renderer.render(&button.view(&Environment::new(100.0)));

        assert_eq!(line, "[·##>##·Go·] Idle");
    }

    #[test]
    fn mirrored_frame_puts_knob_on_the_right() {
        let button = SlideConfirm::new("Go", ConfirmAction::default());
        let mut renderer = TextRenderer::new(10.0);
        let env = Environment::new(100.0).layout_direction(LayoutDirection::RightToLeft);
        let line = renderer.render(&button.view(&env));

        assert!(line.starts_with("[·Go"));
        assert!(line.contains("##<##]"));
    }

    #[test]
    fn disabled_frame() {
        let button = SlideConfirm::new("Go", ConfirmAction::default());
        let mut renderer = TextRenderer::new(10.0);
        let line = renderer.render(&button.view(&Environment::new(100.0).enabled(false)));

        assert!(line.contains('x'));
        assert!(line.ends_with("(disabled)"));
    }
}
