//! User domain types.

wire_enum! {
    /// Account permission level. Ordered by privilege.
    ///
    /// Wire format: lowercase string (`"user"`, `"manager"`, `"admin"`).
    pub enum UserRole {
        User => "user",
        Manager => "manager",
        Admin => "admin",
    }
    default = User;
}
