//! Restaurant table order types.

wire_enum! {
    /// Kitchen acceptance state of a table order.
    pub enum OrderStatus {
        New => "New",
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
    default = New;
}
