use std::error::Error;

use log::error;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::MarketDatum;

const CANVAS_WIDTH: u32 = 960;
const CANVAS_HEIGHT: u32 = 384;

const BACKGROUND: RGBColor = RGBColor(0, 0, 0);
const AXIS: RGBColor = RGBColor(156, 163, 175);
const LABEL: RGBColor = RGBColor(209, 213, 219);
const GRID: RGBAColor = RGBAColor(255, 255, 255, 0.1);

/// Top of the y axis: the largest value plus 10% headroom.
pub fn y_axis_max(data: &[MarketDatum]) -> u32 {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0);
    (max + max / 10).max(1)
}

pub fn value_label(datum: &MarketDatum) -> String {
    format!("${}M", datum.value)
}

/// Text read out for the canvas, which has no DOM content of its own.
pub fn chart_summary(data: &[MarketDatum]) -> String {
    let values: Vec<String> = data
        .iter()
        .map(|d| format!("{}: {}", d.label, value_label(d)))
        .collect();
    format!("Estimated annual spend by market. {}", values.join(", "))
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: &'static [MarketDatum],
}

#[function_component(MarketChart)]
pub fn market_chart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let data = props.data;
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw(canvas, data) {
                        error!("Failed to draw market chart: {}", err);
                    }
                }
                || ()
            },
            data,
        );
    }

    html! {
        <div class="market-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="width: 100%; height: 100%;"
                role="img"
                aria-label={chart_summary(props.data)}
            >
                { props.data.iter().map(|d| html! { <p key={d.label}>{format!("{}: {}", d.label, value_label(d))}</p> }).collect::<Html>() }
            </canvas>
        </div>
    }
}

fn draw(canvas: HtmlCanvasElement, data: &[MarketDatum]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .margin_top(20)
        .margin_right(30)
        .margin_left(20)
        .margin_bottom(5)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0..y_axis_max(data))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(GRID.stroke_width(1))
        .light_line_style(TRANSPARENT.stroke_width(0))
        .axis_style(AXIS.stroke_width(1))
        .label_style(("sans-serif", 14).into_font().color(&AXIS))
        .axis_desc_style(("sans-serif", 15).into_font().color(&LABEL))
        .y_desc("Market Size ($M)")
        .x_labels(data.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => data.get(*i).map(|d| d.label.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(WHITE.filled())
                .margin(12)
                .data(data.iter().enumerate().map(|(i, d)| (i, d.value))),
        )?
        .label("Est. Annual Spend ($M)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], WHITE.filled()));

    let value_style = ("sans-serif", 14)
        .into_font()
        .color(&LABEL)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(data.iter().enumerate().map(|(i, d)| {
        Text::new(value_label(d), (SegmentValue::CenterOf(i), d.value), value_style.clone())
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerMiddle)
        .label_font(("sans-serif", 14).into_font().color(&LABEL))
        .border_style(TRANSPARENT.stroke_width(0))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MARKET_DATA;

    #[test]
    fn test_y_axis_has_headroom() {
        assert_eq!(y_axis_max(MARKET_DATA), 495);
    }

    #[test]
    fn test_value_label_shows_millions() {
        assert_eq!(value_label(&MARKET_DATA[0]), format!("${}M", MARKET_DATA[0].value));
        assert_eq!(value_label(&MarketDatum { label: "Weddings", value: 450 }), "$450M");
    }

    #[test]
    fn test_summary_lists_every_bar() {
        let summary = chart_summary(MARKET_DATA);
        for datum in MARKET_DATA {
            assert!(summary.contains(&format!("{}: ${}M", datum.label, datum.value)));
        }
    }

    #[test]
    fn test_y_axis_never_collapses() {
        assert_eq!(y_axis_max(&[]), 1);
        assert_eq!(y_axis_max(&[MarketDatum { label: "None", value: 0 }]), 1);
    }
}
