use velo_engine::text::{
    builtin_bold, builtin_regular, resolve_family, FontId, FontLoadError, FontSystem,
};

/// The two faces every screen uses, resolved once at startup and passed
/// explicitly to render calls.
pub struct Fonts {
    pub system: FontSystem,
    pub regular: FontId,
    pub bold: FontId,
}

impl Fonts {
    /// Resolves the app faces from the system font directories, falling
    /// back to the embedded DejaVu faces with a warning when a family is
    /// missing or unreadable.
    ///
    /// Only a parse failure of the embedded bytes can surface here.
    pub fn load() -> Result<Self, FontLoadError> {
        let mut system = FontSystem::new();
        let regular = load_face(&mut system, "DejaVu Sans", builtin_regular())?;
        let bold = load_face(&mut system, "DejaVu Sans Bold", builtin_bold())?;
        Ok(Self { system, regular, bold })
    }
}

fn load_face(
    system: &mut FontSystem,
    family: &str,
    builtin: &'static [u8],
) -> Result<FontId, FontLoadError> {
    match resolve_family(family) {
        Ok(bytes) => match system.load_font(&bytes) {
            Ok(id) => return Ok(id),
            Err(err) => log::warn!("{family}: {err}; using the embedded face"),
        },
        Err(err) => log::warn!("{err}; using the embedded face"),
    }
    system.load_font(builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_resolves_two_distinct_faces() {
        let fonts = Fonts::load().unwrap();
        assert_ne!(fonts.regular, fonts.bold);
    }

    #[test]
    fn missing_family_falls_back_to_the_embedded_face() {
        let mut system = FontSystem::new();
        let id = load_face(&mut system, "NoSuchFamily Xyzzy", builtin_regular()).unwrap();
        assert!(system.measure_text("fallback", id, 20.0, None).x > 0.0);
    }
}
