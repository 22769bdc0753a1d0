// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Field table shorthand for `specs::table`.
///
/// `Key => group.field as "json_key", "Label";` expands into one `Field` whose
/// accessor reads `SpecGroups::group` → `field`. Typos in `group`/`field` are
/// compile errors, so every row is checked against the schema.
#[macro_export]
macro_rules! spec_fields {
    ($( $key:ident => $group:ident . $field:ident as $json:literal, $label:literal; )+) => {
        &[
            $(
                $crate::specs::table::Field {
                    key: $crate::specs::table::GroupKey::$key,
                    path: concat!(stringify!($group), ".", $json),
                    label: $label,
                    get: |s| s.$group.as_ref().and_then(|g| g.$field.as_deref()),
                },
            )+
        ]
    };
}
