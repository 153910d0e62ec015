use std::io::Write;

use backoffice_app::domain::{dashboard::DashboardService, orders::OrderStatus};
use tabled::{builder::Builder, settings::Style};

pub(crate) async fn run(dashboard: &dyn DashboardService, out: &mut impl Write) -> Result<(), String> {
    let summary = dashboard.summary().await;

    let mut builder = Builder::default();

    builder.push_record(["metric".to_string(), "value".to_string()]);

    let rows = [
        ("technologies", summary.technologies),
        ("active technologies", summary.active_technologies),
        ("tutorials", summary.tutorials),
        ("published tutorials", summary.published_tutorials),
        ("formations", summary.formations),
        ("published formations", summary.published_formations),
        ("lessons", summary.lessons),
        ("blocks", summary.blocks),
        ("categories", summary.categories),
        ("dishes", summary.dishes),
        ("users", summary.users),
        ("active users", summary.active_users),
        ("orders", summary.orders),
    ];

    for (metric, value) in rows {
        builder.push_record([metric.to_string(), value.to_string()]);
    }

    for status in OrderStatus::ALL {
        builder.push_record([
            format!("orders {}", status.as_str().to_lowercase()),
            summary.orders_with_status(status).to_string(),
        ]);
    }

    builder.push_record(["revenue".to_string(), summary.revenue.to_string()]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use backoffice_app::domain::dashboard::{DashboardSummary, MockDashboardService};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn prints_revenue_and_status_breakdown() -> TestResult {
        let mut dashboard = MockDashboardService::new();

        dashboard.expect_summary().returning(|| DashboardSummary {
            orders: 2,
            orders_by_status: [(OrderStatus::Pending, 2)].into_iter().collect(),
            revenue: 12_500,
            ..DashboardSummary::default()
        });

        let mut out = Vec::new();
        run(&dashboard, &mut out).await?;

        let printed = String::from_utf8(out)?;

        assert!(printed.contains("12500"), "revenue missing: {printed}");
        assert!(printed.contains("orders pending"), "status rows missing: {printed}");

        Ok(())
    }
}
