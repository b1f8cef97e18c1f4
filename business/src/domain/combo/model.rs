/// A card slot inside a combo, with the zones it must occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboCardUse {
    pub card: UsedCard,
    pub quantity: u32,
    pub zone_locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedCard {
    pub id: i64,
    pub name: String,
}

/// An effect a combo produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducedFeature {
    pub id: i64,
    pub name: String,
}

/// A discovered combo: the cards it uses, the effects it produces, and the
/// natural-language prerequisite/description text. The `id` is assigned by
/// the discovery service and is the merge key for every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    pub id: String,
    pub uses: Vec<ComboCardUse>,
    pub mana_needed: String,
    /// Color identity encoding.
    pub identity: String,
    pub produces: Vec<ProducedFeature>,
    pub easy_prerequisites: String,
    pub notable_prerequisites: String,
    /// Untranslated source text. May contain literal game-symbol tokens
    /// such as `{T}` or `{0}`.
    pub description: String,
    pub popularity: i64,
}

impl Combo {
    /// Flattened card names of `uses`. Derived on every call; writes embed
    /// this value instead of storing and mutating their own copy.
    pub fn card_names(&self) -> Vec<String> {
        self.uses.iter().map(|u| u.card.name.clone()).collect()
    }

    /// The association record linking this combo to an owning pool.
    pub fn pool_association(&self) -> PoolComboAssociation {
        PoolComboAssociation {
            id: self.id.clone(),
            card_names: self.card_names(),
        }
    }
}

/// Join record between a pool and a combo, keyed by the combo id. Purely
/// derived: regenerated whenever the owning combo is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolComboAssociation {
    pub id: String,
    pub card_names: Vec<String>,
}

/// Translated fields produced by one translation pass over a stored combo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboTranslation {
    pub description_ja: String,
    pub notable_prerequisites_ja: String,
}
