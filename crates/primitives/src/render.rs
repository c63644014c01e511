/// Values that can be carried as the text payload of an outcome.
pub trait Render {
	/// Renders the value as payload text.
	fn render(&self) -> String;
}

macro_rules! impl_render_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl Render for $ty {
				fn render(&self) -> String {
					self.to_string()
				}
			}
		)*
	};
}

impl_render_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, bool, char, String, &'static str);

impl<V: Render> Render for Option<V> {
	fn render(&self) -> String {
		self.as_ref().map(Render::render).unwrap_or_default()
	}
}

impl<V: Render> Render for Vec<V> {
	fn render(&self) -> String {
		self.iter().map(Render::render).collect::<Vec<_>>().join(", ")
	}
}
