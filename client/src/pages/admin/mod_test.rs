use super::*;

#[test]
fn from_param_round_trips_every_tab() {
    for tab in AdminTab::ALL {
        assert_eq!(AdminTab::from_param(Some(tab.as_param())), tab);
    }
}

#[test]
fn from_param_defaults_to_products() {
    assert_eq!(AdminTab::from_param(None), AdminTab::Products);
    assert_eq!(AdminTab::from_param(Some("users")), AdminTab::Products);
}

#[test]
fn href_carries_tab_query() {
    assert_eq!(AdminTab::Orders.href(), "/admin?tab=orders");
    assert_eq!(AdminTab::PaymentMethods.href(), "/admin?tab=payment");
}
