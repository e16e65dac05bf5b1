use heck::ToShoutySnakeCase;

/// A proposed field name in both of its forms.
///
/// `local` is used for instance fields and locals, `static_name` for static
/// constants. Use [`Name::derived`] when only the local form is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
	pub local: String,
	pub static_name: String,
}

impl Name {
	pub fn new(local: impl Into<String>, static_name: impl Into<String>) -> Self {
		Self {
			local: local.into(),
			static_name: static_name.into(),
		}
	}

	/// Builds a name whose static form is the screaming snake case of `local`.
	pub fn derived(local: impl Into<String>) -> Self {
		let local = local.into();
		let static_name = to_screaming_snake_case(&local);
		Self { local, static_name }
	}

	/// Returns the form used for a field with the given staticness.
	pub fn for_field(&self, is_static: bool) -> &str {
		if is_static { &self.static_name } else { &self.local }
	}
}

/// Splits an internal class name into its package and simple name.
///
/// `net/example/Foo` -> `(Some("net/example"), "Foo")`, `Foo` -> `(None, "Foo")`.
pub fn split_package(class_name: &str) -> (Option<&str>, &str) {
	match class_name.rsplit_once('/') {
		Some((package, simple)) => (Some(package), simple),
		None => (None, class_name),
	}
}

/// `blockPos` -> `BLOCK_POS`.
pub fn to_screaming_snake_case(name: &str) -> String {
	name.to_shouty_snake_case()
}
