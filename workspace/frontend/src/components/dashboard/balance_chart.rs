use common::HistorySeries;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const CHART_ID: &str = "balance-history-chart";

#[derive(Properties, PartialEq)]
pub struct BalanceChartProps {
    pub series: HistorySeries,
}

#[function_component(BalanceChart)]
pub fn balance_chart(props: &BalanceChartProps) -> Html {
    if props.series.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-chart-area text-4xl mb-4 opacity-50"></i>
                <p>{"No balance history for this account."}</p>
            </div>
        };
    }

    html! { <PlotlyChart series={props.series.clone()} /> }
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    series: HistorySeries,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.series.clone()), move |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let trace = Scatter::new(series.labels.clone(), series.values_f64())
                .mode(Mode::LinesMarkers)
                .name("Balance")
                .line(plotly::common::Line::new().color("rgb(59, 130, 246)").width(2.0));

            let layout = Layout::new()
                .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Date")))
                .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Balance")))
                .height(320);

            // Plotly.js wants plain JS objects, so go through JSON
            let data_js = js_sys::Array::new();
            let layout_js = serde_json::to_string(&trace)
                .ok()
                .and_then(|json| js_sys::JSON::parse(&json).ok())
                .and_then(|trace_js| {
                    data_js.push(&trace_js);
                    serde_json::to_string(&layout).ok()
                })
                .and_then(|json| js_sys::JSON::parse(&json).ok());

            match layout_js {
                Some(layout_js) => newPlot(CHART_ID, data_js.into(), layout_js),
                None => log::error!("Failed to convert balance chart to JS values"),
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:320px;"></div>
    }
}
