use cosmwasm_std::Addr;

/// Decides whether a caller may perform a gated operation.
///
/// The scheduler only ever asks this question, so a single key, a multisig
/// proxy or a policy contract can sit behind it without changes to the burn
/// logic.
pub trait Authorizer {
    fn authorizes(&self, caller: &Addr) -> bool;
}

// Single key: the caller must be this exact address.
impl Authorizer for Addr {
    fn authorizes(&self, caller: &Addr) -> bool {
        self == caller
    }
}

#[cfg(test)]
mod tests {
    use super::Authorizer;
    use cosmwasm_std::Addr;

    #[test]
    fn test_single_key_authorizer() {
        let authority = Addr::unchecked("burn_authority");
        assert!(authority.authorizes(&Addr::unchecked("burn_authority")));
        assert!(!authority.authorizes(&Addr::unchecked("someone_else")));
        assert!(!authority.authorizes(&Addr::unchecked("")));
    }
}
