use crate::common::{test_backend, TEST_TOKEN};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn clinic_stats_decode_all_counters() {
    let backend = test_backend().await;

    let stats = backend.dashboard_stats(TEST_TOKEN).await.unwrap();

    assert_eq!(stats.today_appointments, 12);
    assert_eq!(stats.active_doctors, 4);
    assert_eq!(stats.total_patients, 318);
    assert_eq!(stats.monthly_revenue, "EGP 42,500");
}

#[tokio::test]
async fn platform_stats_decode_all_counters() {
    let backend = test_backend().await;

    let stats = backend.platform_stats(TEST_TOKEN).await.unwrap();

    assert_eq!(stats.total_clinics, 57);
    assert_eq!(stats.active_subscriptions, 51);
    assert_eq!(stats.pending_approvals, 3);
    assert_eq!(stats.monthly_revenue, "EGP 480,000");
}
