use imp::AccountImpl;

/// The public face of an account. Everything about its state lives in a private type behind a
/// box, so changing that type never touches code that uses `Account`.
///
/// The box makes the account move-only: it is not `Clone`.
#[derive(Debug)]
pub struct Account {
    imp: Box<AccountImpl>,
}

impl Account {
    pub fn new(v: i32) -> Account {
        Account {
            imp: Box::new(AccountImpl::new(v)),
        }
    }

    pub fn my_method(&self) -> i32 {
        self.imp.my_method()
    }
}

mod imp {
    #[derive(Debug)]
    pub struct AccountImpl {
        v: i32,
    }

    impl AccountImpl {
        pub const fn new(v: i32) -> AccountImpl {
            AccountImpl {
                v,
            }
        }

        pub const fn my_method(&self) -> i32 {
            self.v
        }
    }
}
