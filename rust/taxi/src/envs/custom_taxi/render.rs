use super::CustomTaxi;
use gymnasium::RenderFrame;

#[derive(Clone, Copy)]
enum Color {
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
}

fn colorize(s: &str, color: Color, bold: bool, highlight: bool) -> String {
    let mut attrs = vec![(color as u8 + if highlight { 10 } else { 0 }).to_string()];
    if bold {
        attrs.push("1".to_string());
    }

    format!("\x1b[{}m{s}\x1b[0m", attrs.join(";"))
}

impl CustomTaxi {
    /// Text frame of the grid with the taxi, passenger and destination marked in ANSI colors,
    /// followed by the last action taken.
    pub fn render(&self) -> RenderFrame {
        let mut out = self
            .map
            .desc()
            .iter()
            .map(|l| l.iter().map(|c| c.to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        if let Some(ts) = self.s.and_then(|s| self.codec.decode(s).ok()) {
            let locs = self.map.locs();
            let (tr, tc) = (ts.taxi_row + 1, 2 * ts.taxi_col + 1);
            if ts.passenger < locs.len() {
                out[tr][tc] = colorize(&out[tr][tc], Color::Yellow, false, true);
                let (pi, pj) = locs[ts.passenger];
                let (pi, pj) = (pi + 1, 2 * pj + 1);
                out[pi][pj] = colorize(&out[pi][pj], Color::Blue, true, false);
            } else {
                let cell = if out[tr][tc] == " " { "_" } else { out[tr][tc].as_str() };
                out[tr][tc] = colorize(cell, Color::Green, false, true);
            }

            let (di, dj) = locs[ts.destination];
            let (di, dj) = (di + 1, 2 * dj + 1);
            out[di][dj] = colorize(&out[di][dj], Color::Magenta, false, false);
        }

        let mut frame = out
            .iter()
            .map(|l| l.concat())
            .collect::<Vec<_>>()
            .join("\n");
        frame.push('\n');
        match self.last_action {
            Some(a) => frame.push_str(&format!("  ({})\n", a.name())),
            None => frame.push('\n'),
        }

        RenderFrame::Ansi(frame)
    }
}
