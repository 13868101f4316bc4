use shared::totals::clamp_percentage;
use shared::format_percentage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Extra modifier class such as `card-income`
    #[prop_or_default]
    pub variant: Option<AttrValue>,
}

#[function_component(DashboardCard)]
pub fn dashboard_card(props: &DashboardCardProps) -> Html {
    html! {
        <div class={classes!("dashboard-card", props.variant.as_ref().map(|v| v.to_string()))}>
            <div class="dashboard-card-icon">
                <i class={props.icon.to_string()}></i>
            </div>
            <div class="dashboard-card-content">
                <span class="dashboard-card-title">{&props.title}</span>
                <span class="dashboard-card-value">{&props.value}</span>
                {if let Some(caption) = &props.caption {
                    html! { <span class="dashboard-card-caption">{caption}</span> }
                } else { html! {} }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percentage: f64,
    /// CSS colour for the fill; defaults to the stylesheet's
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// Width style for a fill; out-of-range values are clamped to 0..=100
pub fn fill_style(percentage: f64, color: Option<&str>) -> String {
    let width = clamp_percentage(percentage);
    match color {
        Some(color) => format!("width: {:.1}%; background-color: {};", width, color),
        None => format!("width: {:.1}%;", width),
    }
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let style = fill_style(props.percentage, props.color.as_deref());

    html! {
        <div class="progress">
            <div class="progress-track">
                <div class="progress-fill" style={style}></div>
            </div>
            <span class="progress-label">{format_percentage(props.percentage)}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_clamps_width() {
        assert_eq!(fill_style(150.0, None), "width: 100.0%;");
        assert_eq!(fill_style(-5.0, None), "width: 0.0%;");
        assert_eq!(
            fill_style(42.0, Some("var(--chart-1)")),
            "width: 42.0%; background-color: var(--chart-1);"
        );
    }
}
