use shunting_yard::{Postfix, Token};

/// One token per line, in input order.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{}\n", token));
    }
    out
}

/// The postfix stack from the top down, under a header.
pub fn render_postfix(postfix: &Postfix) -> String {
    let mut out = String::from("----- Expression Output Stack -----\n");
    for token in postfix.iter_top_first() {
        out.push_str(&format!("{}\n", token));
    }
    out
}
