use marketplace_page_wasm::application::chart_config::order_status_chart;
use marketplace_page_wasm::domain::dashboard::OrderStatusCounts;

#[test]
fn order_status_doughnut_config() {
    let config = order_status_chart(&OrderStatusCounts::new(5, 8, 12, 3));
    insta::assert_json_snapshot!(config, @r###"
    {
      "type": "doughnut",
      "data": {
        "labels": [
          "Completed",
          "In Progress",
          "Pending",
          "Cancelled"
        ],
        "datasets": [
          {
            "data": [
              12,
              8,
              5,
              3
            ],
            "backgroundColor": [
              "#28a745",
              "#17a2b8",
              "#ffc107",
              "#dc3545"
            ],
            "hoverOffset": 4
          }
        ]
      },
      "options": {
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
          "legend": {
            "position": "bottom"
          },
          "title": {
            "display": true,
            "text": "Order Status Distribution"
          }
        }
      }
    }
    "###);
}
