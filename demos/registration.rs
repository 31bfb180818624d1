use rand_core::OsRng;
use srp_verifier::{constants::G_2048, Deriver, Registration, Result};

fn main() -> Result<()> {
    // example username and password, never use these...
    const USERNAME: &str = "jlpicard_1701";
    const PASSWORD: &str = "g04tEd_c4pT41N";

    // ===== Registration =====
    let mut deriver = Deriver::new(G_2048.clone(), OsRng);
    let registration = deriver.register(PASSWORD)?;
    println!("[client] Registering {USERNAME}");
    println!("[client] salt     = {}", registration.salt);
    println!("[client] verifier = {}", registration.verifier);

    // the account-registration collaborator stores the pair; the password
    // itself is never transmitted
    let mut database = SingleUserDatabase::default();
    database.store(USERNAME, registration.clone());

    // ===== Later authentication attempt =====
    let stored = database
        .lookup(USERNAME)
        .expect("user was just registered");
    let candidate = deriver.compute_verifier(PASSWORD, &stored.salt)?;

    assert_eq!(candidate, stored.verifier);
    println!("[server] Verifier match for {USERNAME}, password accepted");

    Ok(())
}

/// Registration store which can hold the record for one user
#[derive(Debug, Default)]
struct SingleUserDatabase {
    user: Option<String>,
    registration: Option<Registration>,
}

impl SingleUserDatabase {
    fn store(&mut self, username: &str, registration: Registration) {
        self.user = Some(username.to_owned());
        self.registration = Some(registration);
    }

    fn lookup(&self, username: &str) -> Option<&Registration> {
        match &self.user {
            Some(stored) if stored == username => self.registration.as_ref(),
            _ => None,
        }
    }
}
