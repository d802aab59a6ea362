//! Price chart - one line per named market, price against tick.
//!
//! A convenience for eyeballing a run; the JSON bundle is the durable output.
//! Rendered as a standalone SVG document from the untrimmed step records.

use std::collections::BTreeMap;
use std::path::Path;

use agora_core::Tick;
use agora_recorder::RecordedRun;

use crate::error::Result;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 60.0;
const PALETTE: [&str; 3] = ["red", "green", "blue"];

/// (tick, price) points of one market; a later record for the same tick wins
fn series(run: &RecordedRun, market_id: usize) -> BTreeMap<Tick, f64> {
    run.steps_for_market(market_id)
        .map(|s| (s.market_time, s.market_price))
        .collect()
}

/// Map `value` from `[lo, hi]` onto `[out_lo, out_hi]`
fn scale(value: f64, lo: f64, hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    if hi > lo {
        out_lo + (value - lo) / (hi - lo) * (out_hi - out_lo)
    } else {
        (out_lo + out_hi) / 2.0
    }
}

/// Render the price chart as an SVG document
pub fn render_svg(run: &RecordedRun, markets: &[String]) -> String {
    let lines: Vec<BTreeMap<Tick, f64>> = (0..markets.len()).map(|m| series(run, m)).collect();

    let ticks = lines.iter().flat_map(|l| l.keys().copied());
    let (t_lo, t_hi) = ticks.fold((u64::MAX, 0), |(lo, hi), t| (lo.min(t), hi.max(t)));
    let prices = lines.iter().flat_map(|l| l.values().copied());
    let (p_lo, p_hi) = prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="white"/>
<line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>
<line x1="{m}" y1="{m}" x2="{m}" y2="{b}" stroke="black"/>
<text x="{cx}" y="{xl}" text-anchor="middle" font-size="14">ticks</text>
<text x="16" y="{cy}" text-anchor="middle" font-size="14" transform="rotate(-90 16 {cy})">market price</text>
"#,
        w = WIDTH,
        h = HEIGHT,
        m = MARGIN,
        b = HEIGHT - MARGIN,
        r = WIDTH - MARGIN,
        cx = WIDTH / 2.0,
        xl = HEIGHT - MARGIN / 3.0,
        cy = HEIGHT / 2.0,
    );

    if t_lo <= t_hi {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"11\">{}</text>\n<text x=\"{}\" y=\"{}\" font-size=\"11\" text-anchor=\"end\">{}</text>\n",
            MARGIN,
            HEIGHT - MARGIN + 16.0,
            t_lo,
            WIDTH - MARGIN,
            HEIGHT - MARGIN + 16.0,
            t_hi
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"11\" text-anchor=\"end\">{:.3}</text>\n<text x=\"{}\" y=\"{}\" font-size=\"11\" text-anchor=\"end\">{:.3}</text>\n",
            MARGIN - 4.0,
            HEIGHT - MARGIN,
            p_lo,
            MARGIN - 4.0,
            MARGIN + 4.0,
            p_hi
        ));
    }

    for (i, (name, line)) in markets.iter().zip(&lines).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<String> = line
            .iter()
            .map(|(&t, &p)| {
                let x = scale(t as f64, t_lo as f64, t_hi as f64, MARGIN, WIDTH - MARGIN);
                let y = scale(p, p_lo, p_hi, HEIGHT - MARGIN, MARGIN);
                format!("{:.2},{:.2}", x, y)
            })
            .collect();

        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1\" points=\"{}\"/>\n",
            color,
            points.join(" ")
        ));
        let legend_y = MARGIN + 18.0 * i as f64;
        svg.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"{c}\" stroke-width=\"2\"/>\n<text x=\"{tx}\" y=\"{ty}\" font-size=\"12\">{n}</text>\n",
            x = WIDTH - MARGIN - 140.0,
            x2 = WIDTH - MARGIN - 120.0,
            y = legend_y,
            c = color,
            tx = WIDTH - MARGIN - 114.0,
            ty = legend_y + 4.0,
            n = escape(name),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the chart and write it to `path`
pub fn save_svg(run: &RecordedRun, markets: &[String], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_svg(run, markets))?;
    log::info!("Chart written to {}", path.display());
    Ok(())
}
