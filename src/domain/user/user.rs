//! The User aggregate root.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    Address, AddressRecord, DomainError, Email, PersonName, Phone, Timestamp,
};

use super::loyalty_points::LoyaltyPoints;
use super::password::PasswordHash;
use super::role::Role;
use super::status::Status;
use super::user_id::UserId;

/// Primitive representation of a user, the sole contract between the core
/// and persistence/transport adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Already hashed.
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressRecord>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<Timestamp>,
    /// Client variant only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_points: Option<u32>,
}

/// Raw input for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Already hashed.
    pub password: String,
    pub role: String,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressRecord>,
    /// Client role only; defaults to zero.
    pub loyalty_points: Option<u32>,
}

/// Role-specific state and behavior, keyed by role instead of subclassing.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Standard,
    Admin,
    Client { loyalty_points: LoyaltyPoints },
}

/// The user aggregate root.
///
/// Owns one instance of each required value object plus optional phone and
/// address. `created_at` is set once at construction; `updated_at` is
/// stamped by every mutation that actually changes state. Mutating a field
/// to a value equal to the current one is a no-op and leaves `updated_at`
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    name: PersonName,
    password: PasswordHash,
    role: Role,
    status: Status,
    phone: Option<Phone>,
    address: Option<Address>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    last_login_at: Option<Timestamp>,
    kind: AccountKind,
}

impl User {
    /// Validating factory for new users.
    ///
    /// Sets `created_at` to the supplied instant and leaves `updated_at`
    /// unset. A missing status defaults to [`Status::Active`]; this default
    /// applies only here, never on reload.
    pub fn create(input: NewUser, now: Timestamp) -> Result<Self, DomainError> {
        let role = Role::parse(&input.role)?;
        let status = match input.status.as_deref() {
            Some(raw) => Status::parse(raw)?,
            None => Status::Active,
        };
        let kind = Self::kind_for(role, input.loyalty_points)?;

        Ok(Self {
            id: UserId::create(&input.id)?,
            email: Email::create(&input.email)?,
            name: PersonName::create(&input.name)?,
            password: PasswordHash::create(&input.password)?,
            role,
            status,
            phone: input.phone.as_deref().map(Phone::create).transpose()?,
            address: input.address.map(Address::create).transpose()?,
            created_at: now,
            updated_at: None,
            last_login_at: None,
            kind,
        })
    }

    /// Reconstructs a user from stored primitives.
    ///
    /// Every field is re-validated; missing required fields fail instead of
    /// being defaulted.
    pub fn from_persistence(record: UserRecord) -> Result<Self, DomainError> {
        let role = Role::parse(&record.role)?;
        let status = match record.status.as_deref() {
            Some(raw) => Status::parse(raw)?,
            None => return Err(DomainError::missing_field("status")),
        };
        let kind = Self::kind_for(role, record.loyalty_points)?;

        Ok(Self {
            id: UserId::from_persistence(&record.id)?,
            email: Email::from_persistence(&record.email)?,
            name: PersonName::from_persistence(&record.name)?,
            password: PasswordHash::from_persistence(&record.password)?,
            role,
            status,
            phone: record
                .phone
                .as_deref()
                .map(Phone::from_persistence)
                .transpose()?,
            address: record.address.map(Address::from_persistence).transpose()?,
            created_at: record.created_at,
            updated_at: record.updated_at,
            last_login_at: record.last_login_at,
            kind,
        })
    }

    // Loyalty accounting exists only on the client variant; supplying points
    // for any other role is a construction failure, not a silent drop.
    fn kind_for(role: Role, loyalty_points: Option<u32>) -> Result<AccountKind, DomainError> {
        match role {
            Role::Client => Ok(AccountKind::Client {
                loyalty_points: LoyaltyPoints::create(loyalty_points.unwrap_or(0)),
            }),
            _ if loyalty_points.is_some() => Err(DomainError::invariant(
                "Loyalty points require the client role",
            )),
            Role::Admin => Ok(AccountKind::Admin),
            _ => Ok(AccountKind::Standard),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    pub fn last_login_at(&self) -> Option<Timestamp> {
        self.last_login_at
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Current loyalty balance; `None` for non-client accounts.
    pub fn loyalty_points(&self) -> Option<LoyaltyPoints> {
        match &self.kind {
            AccountKind::Client { loyalty_points } => Some(*loyalty_points),
            _ => None,
        }
    }

    /// Identity comparison: two users are the same entity when their ids match.
    pub fn same_identity_as(&self, other: &User) -> bool {
        self.id == other.id
    }

    pub fn change_email(&mut self, new_email: Email, now: Timestamp) {
        if self.email != new_email {
            self.email = new_email;
            self.updated_at = Some(now);
        }
    }

    pub fn change_name(&mut self, new_name: PersonName, now: Timestamp) {
        if self.name != new_name {
            self.name = new_name;
            self.updated_at = Some(now);
        }
    }

    pub fn change_password(&mut self, new_password: PasswordHash, now: Timestamp) {
        if self.password != new_password {
            self.password = new_password;
            self.updated_at = Some(now);
        }
    }

    pub fn assign_phone(&mut self, new_phone: Phone, now: Timestamp) {
        if self.phone.as_ref() != Some(&new_phone) {
            self.phone = Some(new_phone);
            self.updated_at = Some(now);
        }
    }

    pub fn remove_phone(&mut self, now: Timestamp) {
        if self.phone.is_some() {
            self.phone = None;
            self.updated_at = Some(now);
        }
    }

    pub fn assign_address(&mut self, new_address: Address, now: Timestamp) {
        if self.address.as_ref() != Some(&new_address) {
            self.address = Some(new_address);
            self.updated_at = Some(now);
        }
    }

    pub fn remove_address(&mut self, now: Timestamp) {
        if self.address.is_some() {
            self.address = None;
            self.updated_at = Some(now);
        }
    }

    pub fn change_status(&mut self, new_status: Status, now: Timestamp) {
        if self.status != new_status {
            self.status = new_status;
            self.updated_at = Some(now);
        }
    }

    /// Changes the user's role.
    ///
    /// An admin may change to anything except superadmin; a client may not
    /// change away from the client role (loyalty accounting would be
    /// orphaned). Changing to the current role is a no-op.
    pub fn change_role(&mut self, new_role: Role, now: Timestamp) -> Result<(), DomainError> {
        if self.role == new_role {
            return Ok(());
        }
        match &self.kind {
            AccountKind::Admin if new_role == Role::SuperAdmin => {
                return Err(DomainError::invariant(
                    "An admin cannot directly elevate to the superadmin role",
                ));
            }
            AccountKind::Client { .. } => {
                return Err(DomainError::invariant(
                    "A client cannot change away from the client role",
                ));
            }
            _ => {}
        }

        self.role = new_role;
        self.kind = Self::kind_for(new_role, None)?;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Records a successful login.
    pub fn record_login(&mut self, now: Timestamp) {
        if self.last_login_at != Some(now) {
            self.last_login_at = Some(now);
            self.updated_at = Some(now);
        }
    }

    /// Adds loyalty points; client accounts only. Adding zero is a no-op.
    pub fn add_loyalty_points(&mut self, amount: u32, now: Timestamp) -> Result<(), DomainError> {
        match &mut self.kind {
            AccountKind::Client { loyalty_points } => {
                let next = loyalty_points.add(amount)?;
                if next != *loyalty_points {
                    *loyalty_points = next;
                    self.updated_at = Some(now);
                }
                Ok(())
            }
            _ => Err(DomainError::invariant(
                "Loyalty points require the client role",
            )),
        }
    }

    /// Subtracts loyalty points; client accounts only.
    ///
    /// Subtracting past zero fails and leaves the balance unchanged.
    pub fn subtract_loyalty_points(
        &mut self,
        amount: u32,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        match &mut self.kind {
            AccountKind::Client { loyalty_points } => {
                let next = loyalty_points.subtract(amount)?;
                if next != *loyalty_points {
                    *loyalty_points = next;
                    self.updated_at = Some(now);
                }
                Ok(())
            }
            _ => Err(DomainError::invariant(
                "Loyalty points require the client role",
            )),
        }
    }

    /// Flattens the aggregate back to its primitive representation, the
    /// exact inverse of [`User::from_persistence`].
    pub fn to_primitives(&self) -> UserRecord {
        UserRecord {
            id: self.id.to_primitives(),
            email: self.email.to_primitives(),
            name: self.name.to_primitives(),
            password: self.password.to_primitives(),
            role: self.role.as_str().to_string(),
            status: Some(self.status.as_str().to_string()),
            phone: self.phone.as_ref().map(Phone::to_primitives),
            address: self.address.as_ref().map(Address::to_primitives),
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
            loyalty_points: self.loyalty_points().map(|points| points.value()),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, User: {}, Email: {}, Role: {}",
            self.id, self.name, self.email, self.role
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn new_user_input(role: &str) -> NewUser {
        NewUser {
            id: "user-1".to_string(),
            email: "some@email.com".to_string(),
            name: "John Doe".to_string(),
            password: "dummy_hashed_password".to_string(),
            role: role.to_string(),
            status: Some("active".to_string()),
            phone: Some("1161619090".to_string()),
            address: Some(AddressRecord::new("someStreet", "1111", "Some City")),
            loyalty_points: None,
        }
    }

    fn client() -> User {
        let mut input = new_user_input("client");
        input.loyalty_points = Some(10);
        User::create(input, Timestamp::now()).unwrap()
    }

    fn admin() -> User {
        User::create(new_user_input("admin"), Timestamp::now()).unwrap()
    }

    #[test]
    fn create_sets_created_at_and_leaves_updated_at_unset() {
        let now = Timestamp::now();
        let user = User::create(new_user_input("user"), now).unwrap();

        assert_eq!(user.created_at(), now);
        assert_eq!(user.updated_at(), None);
        assert_eq!(user.status(), Status::Active);
        assert_eq!(*user.kind(), AccountKind::Standard);
    }

    #[test]
    fn create_defaults_missing_status_to_active() {
        let mut input = new_user_input("user");
        input.status = None;
        let user = User::create(input, Timestamp::now()).unwrap();
        assert_eq!(user.status(), Status::Active);
    }

    #[test]
    fn create_rejects_invalid_fields() {
        let mut input = new_user_input("user");
        input.email = "invalid-email".to_string();
        assert_eq!(
            User::create(input, Timestamp::now()).unwrap_err().code,
            ErrorCode::InvalidEmail
        );

        let mut input = new_user_input("unknown-role");
        input.role = "unknown-role".to_string();
        assert_eq!(
            User::create(input, Timestamp::now()).unwrap_err().code,
            ErrorCode::InvalidRole
        );
    }

    #[test]
    fn client_role_yields_the_client_variant_with_points() {
        let user = client();
        assert_eq!(
            *user.kind(),
            AccountKind::Client {
                loyalty_points: LoyaltyPoints::create(10)
            }
        );
        assert_eq!(user.loyalty_points().unwrap().value(), 10);
    }

    #[test]
    fn client_points_default_to_zero() {
        let user = User::create(new_user_input("client"), Timestamp::now()).unwrap();
        assert_eq!(user.loyalty_points().unwrap().value(), 0);
    }

    #[test]
    fn loyalty_points_with_a_non_client_role_is_rejected() {
        let mut input = new_user_input("user");
        input.loyalty_points = Some(5);
        let err = User::create(input, Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvariantViolation);
    }

    #[test]
    fn change_email_stamps_updated_at_only_on_real_change() {
        let mut user = client();
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_days(1);

        user.change_email(Email::create("new@email.com").unwrap(), ts1);
        assert_eq!(user.updated_at(), Some(ts1));

        // Same value again: no-op, timestamp untouched.
        user.change_email(Email::create("new@email.com").unwrap(), ts2);
        assert_eq!(user.updated_at(), Some(ts1));
    }

    #[test]
    fn change_status_twice_with_same_value_touches_updated_at_once() {
        let mut user = client();
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_days(1);

        user.change_status(Status::Inactive, ts1);
        user.change_status(Status::Inactive, ts2);

        assert_eq!(user.status(), Status::Inactive);
        assert_eq!(user.updated_at(), Some(ts1));
    }

    #[test]
    fn assign_and_remove_phone_follow_the_no_op_rule() {
        let mut user = client();
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_days(1);
        let ts3 = ts1.plus_days(2);

        // Same phone as construction: no-op.
        user.assign_phone(Phone::create("1161619090").unwrap(), ts1);
        assert_eq!(user.updated_at(), None);

        user.remove_phone(ts2);
        assert_eq!(user.phone(), None);
        assert_eq!(user.updated_at(), Some(ts2));

        // Removing an already-absent phone: no-op.
        user.remove_phone(ts3);
        assert_eq!(user.updated_at(), Some(ts2));
    }

    #[test]
    fn assign_and_remove_address_follow_the_no_op_rule() {
        let mut user = client();
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_days(1);

        let other = Address::create(AddressRecord::new("Rivadavia", "100", "CABA")).unwrap();
        user.assign_address(other.clone(), ts1);
        assert_eq!(user.address(), Some(&other));
        assert_eq!(user.updated_at(), Some(ts1));

        user.remove_address(ts2);
        assert_eq!(user.address(), None);
        assert_eq!(user.updated_at(), Some(ts2));
    }

    #[test]
    fn admin_cannot_elevate_to_superadmin() {
        let mut user = admin();
        let err = user
            .change_role(Role::SuperAdmin, Timestamp::now())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvariantViolation);
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.updated_at(), None);
    }

    #[test]
    fn admin_changing_to_its_current_role_is_a_no_op() {
        let mut user = admin();
        user.change_role(Role::Admin, Timestamp::now()).unwrap();
        assert_eq!(user.updated_at(), None);
    }

    #[test]
    fn admin_can_step_down_to_other_roles() {
        let mut user = admin();
        let ts = Timestamp::now();
        user.change_role(Role::User, ts).unwrap();

        assert_eq!(user.role(), Role::User);
        assert_eq!(*user.kind(), AccountKind::Standard);
        assert_eq!(user.updated_at(), Some(ts));
    }

    #[test]
    fn client_cannot_change_away_from_client_role() {
        let mut user = client();
        let err = user.change_role(Role::User, Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvariantViolation);
        assert_eq!(user.role(), Role::Client);
    }

    #[test]
    fn standard_user_becoming_client_starts_with_zero_points() {
        let mut user = User::create(new_user_input("user"), Timestamp::now()).unwrap();
        user.change_role(Role::Client, Timestamp::now()).unwrap();

        assert_eq!(user.role(), Role::Client);
        assert_eq!(user.loyalty_points().unwrap().value(), 0);
    }

    #[test]
    fn loyalty_accounting_updates_the_balance_and_timestamp() {
        let mut user = client();
        let ts1 = Timestamp::now();
        let ts2 = ts1.plus_days(1);

        user.add_loyalty_points(5, ts1).unwrap();
        assert_eq!(user.loyalty_points().unwrap().value(), 15);
        assert_eq!(user.updated_at(), Some(ts1));

        user.subtract_loyalty_points(15, ts2).unwrap();
        assert_eq!(user.loyalty_points().unwrap().value(), 0);
        assert_eq!(user.updated_at(), Some(ts2));
    }

    #[test]
    fn adding_zero_points_is_a_no_op() {
        let mut user = client();
        user.add_loyalty_points(0, Timestamp::now()).unwrap();
        assert_eq!(user.updated_at(), None);
    }

    #[test]
    fn subtracting_past_zero_fails_and_preserves_the_balance() {
        let mut user = client();
        let err = user
            .subtract_loyalty_points(11, Timestamp::now())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvariantViolation);
        assert_eq!(user.loyalty_points().unwrap().value(), 10);
        assert_eq!(user.updated_at(), None);
    }

    #[test]
    fn loyalty_accounting_on_a_non_client_is_rejected() {
        let mut user = admin();
        assert!(user.add_loyalty_points(1, Timestamp::now()).is_err());
        assert!(user.subtract_loyalty_points(1, Timestamp::now()).is_err());
    }

    #[test]
    fn record_login_sets_last_login_and_updated_at() {
        let mut user = client();
        let ts = Timestamp::now();

        user.record_login(ts);
        assert_eq!(user.last_login_at(), Some(ts));
        assert_eq!(user.updated_at(), Some(ts));
    }

    #[test]
    fn from_persistence_requires_a_status() {
        let mut record = client().to_primitives();
        record.status = None;

        let err = User::from_persistence(record).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.details.get("field"), Some(&"status".to_string()));
    }

    #[test]
    fn from_persistence_revalidates_every_field() {
        let mut record = client().to_primitives();
        record.email = "broken".to_string();
        assert_eq!(
            User::from_persistence(record).unwrap_err().code,
            ErrorCode::InvalidEmail
        );

        let mut record = client().to_primitives();
        record.phone = Some("123".to_string());
        assert_eq!(
            User::from_persistence(record).unwrap_err().code,
            ErrorCode::InvalidPhone
        );
    }

    #[test]
    fn round_trips_through_primitives() {
        let user = client();
        let record = user.to_primitives();
        let rebuilt = User::from_persistence(record.clone()).unwrap();

        assert_eq!(rebuilt, user);
        assert_eq!(rebuilt.to_primitives(), record);
    }

    #[test]
    fn round_trip_keeps_absent_optionals_absent() {
        let input = NewUser {
            id: "user-2".to_string(),
            email: "minimal@email.com".to_string(),
            name: "Jane Doe".to_string(),
            password: "dummy_hashed_password".to_string(),
            role: "user".to_string(),
            status: Some("pending_email_verification".to_string()),
            phone: None,
            address: None,
            loyalty_points: None,
        };
        let user = User::create(input, Timestamp::now()).unwrap();
        let record = user.to_primitives();

        assert_eq!(record.phone, None);
        assert_eq!(record.address, None);
        assert_eq!(record.updated_at, None);
        assert_eq!(record.loyalty_points, None);

        let rebuilt = User::from_persistence(record).unwrap();
        assert_eq!(rebuilt, user);
    }

    #[test]
    fn record_serialization_uses_the_wire_shape() {
        let user = client();
        let json = serde_json::to_value(user.to_primitives()).unwrap();

        assert_eq!(json["id"], "user-1");
        assert_eq!(json["role"], "client");
        assert_eq!(json["status"], "active");
        assert_eq!(json["loyaltyPoints"], 10);
        assert!(json.get("updatedAt").is_none());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn same_identity_compares_ids_only() {
        let a = client();
        let mut b = client();
        b.change_email(Email::create("other@email.com").unwrap(), Timestamp::now());

        assert!(a.same_identity_as(&b));
    }

    #[test]
    fn display_summarizes_the_user() {
        let user = client();
        let printed = user.to_string();
        assert!(printed.contains("user-1"));
        assert!(printed.contains("John Doe"));
        assert!(printed.contains("client"));
    }
}
