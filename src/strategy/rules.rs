pub struct Rule<S, A> {
    pub name: &'static str,
    pub applies: fn(&S) -> bool,
    pub act: fn(&S) -> A,
}

pub fn evaluate<S, A>(rules: &[Rule<S, A>], state: &S) -> Option<A> {
    rules.iter().find(|rule| (rule.applies)(state)).map(|rule| {
        debug!("rule: {}", rule.name);
        (rule.act)(state)
    })
}
