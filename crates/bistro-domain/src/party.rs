//! Customer / supplier profile enums.

wire_enum! {
    pub enum PartyKind {
        Customer => "Customer",
        Supplier => "Supplier",
    }
    default = Customer;
}

wire_enum! {
    /// Food preference recorded on the party. Empty string means unspecified.
    pub enum FoodCategory {
        Unspecified => "",
        Veg => "VEG",
        NonVeg => "NON-VEG",
    }
    default = Unspecified;
}

wire_enum! {
    /// Seating / channel the party is usually billed under.
    pub enum BillType {
        Unspecified => "",
        Online => "Online",
        Ac => "AC",
        NonAc => "NonAC",
        Regular => "Regular",
    }
    default = Unspecified;
}
