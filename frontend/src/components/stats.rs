use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class="stat-tile">
            <span class="stat-value">{props.value.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[function_component(StatsStrip)]
pub fn stats_strip() -> Html {
    html! {
        <section class="stats-strip">
            <StatTile value="25,000+" label="Reports reviewed" />
            <StatTile value="1.8 lakh" label="Disputes filed" />
            <StatTile value="+96" label="Average score gain" />
            <StatTile value="4.8 / 5" label="Client rating" />
            <style>
                {r#"
                .stats-strip {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .stat-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: #eef2ff;
                }
                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1e40af;
                }
                .stat-label {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .stats-strip {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
