#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    Sale,
    Rent,
}

impl ListingKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Sale => "For sale",
            ListingKind::Rent => "For rent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub neighborhood: &'static str,
    pub price: &'static str,
    pub beds: u8,
    pub baths: u8,
    pub area_sqft: u32,
    pub image: &'static str,
    pub kind: ListingKind,
    pub featured: bool,
}

pub fn all() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Glass House on the Bluff",
            neighborhood: "Sea Cliff",
            price: "$4,850,000",
            beds: 4,
            baths: 4,
            area_sqft: 3900,
            image: "/assets/listings/bluff.webp",
            kind: ListingKind::Sale,
            featured: true,
        },
        Listing {
            id: 2,
            title: "Restored Victorian",
            neighborhood: "Alamo Square",
            price: "$2,995,000",
            beds: 5,
            baths: 3,
            area_sqft: 3200,
            image: "/assets/listings/victorian.webp",
            kind: ListingKind::Sale,
            featured: true,
        },
        Listing {
            id: 3,
            title: "Harbour View Loft",
            neighborhood: "Embarcadero",
            price: "$6,400 / month",
            beds: 2,
            baths: 2,
            area_sqft: 1450,
            image: "/assets/listings/loft.webp",
            kind: ListingKind::Rent,
            featured: true,
        },
        Listing {
            id: 4,
            title: "Garden Cottage",
            neighborhood: "Noe Valley",
            price: "$1,650,000",
            beds: 2,
            baths: 1,
            area_sqft: 1100,
            image: "/assets/listings/cottage.webp",
            kind: ListingKind::Sale,
            featured: false,
        },
        Listing {
            id: 5,
            title: "Penthouse with Terrace",
            neighborhood: "Rincon Hill",
            price: "$9,800 / month",
            beds: 3,
            baths: 3,
            area_sqft: 2300,
            image: "/assets/listings/penthouse.webp",
            kind: ListingKind::Rent,
            featured: false,
        },
        Listing {
            id: 6,
            title: "Mid-century Hillside",
            neighborhood: "Twin Peaks",
            price: "$2,350,000",
            beds: 3,
            baths: 2,
            area_sqft: 2050,
            image: "/assets/listings/hillside.webp",
            kind: ListingKind::Sale,
            featured: false,
        },
    ]
}

pub fn featured() -> Vec<Listing> {
    all().into_iter().filter(|l| l.featured).collect()
}

/// Listings of the given kind, or all of them for `None`.
pub fn filtered(kind: Option<ListingKind>) -> Vec<Listing> {
    all()
        .into_iter()
        .filter(|l| kind.map_or(true, |k| l.kind == k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_kind() {
        assert_eq!(filtered(None).len(), all().len());
        assert!(filtered(Some(ListingKind::Rent)).iter().all(|l| l.kind == ListingKind::Rent));
        assert_eq!(filtered(Some(ListingKind::Sale)).len() + filtered(Some(ListingKind::Rent)).len(), all().len());
    }

    #[test]
    fn test_ids_are_unique_card_keys() {
        let mut ids: Vec<u32> = all().iter().map(|listing| listing.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_featured_subset() {
        assert_eq!(featured().len(), 3);
        assert!(featured().iter().all(|l| l.featured));
    }
}
