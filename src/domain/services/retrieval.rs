#[cfg(test)]
#[path = "retrieval_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Site,
    Culture,
    Artisan,
}

/// One entry in the built-in guide. Keywords are matched as whole tokens
/// against the query, never as substrings.
pub struct GuideDocument {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub content: &'static str,
    keywords: &'static [&'static str],
}

static GUIDE_DOCUMENTS: [GuideDocument; 6] = [
    GuideDocument {
        kind: DocumentKind::Site,
        title: "Dassam Falls",
        content: "Dassam Falls is a spectacular waterfall near Ranchi, located in Taimara village. It is a natural cascade of the Subarnarekha River. The best time to visit is during the monsoon season (July-September) when the water level is high. It is a popular picnic spot but visitors should be cautious as the rocks can be slippery.",
        keywords: &["waterfall", "dassam", "ranchi", "picnic", "falls"],
    },
    GuideDocument {
        kind: DocumentKind::Site,
        title: "Netarhat",
        content: "Known as the \"Queen of Chotanagpur\", Netarhat is a beautiful hill station famous for its stunning sunrises and sunsets. Key attractions include Magnolia Point and the Upper and Lower Ghaghri Falls. It offers a cool climate and is perfect for nature lovers.",
        keywords: &["netarhat", "hill station", "sunrise", "sunset", "nature"],
    },
    GuideDocument {
        kind: DocumentKind::Culture,
        title: "Sohrai and Khovar Painting",
        content: "Sohrai and Khovar are traditional mural art forms practiced by tribal women in Jharkhand. Sohrai is celebrated during the harvest festival, and Khovar is associated with marriage ceremonies. These paintings use natural pigments and depict flora, fauna, and tribal life. They have received the Geographical Indication (GI) tag.",
        keywords: &["painting", "sohrai", "khovar", "art", "tribal", "culture"],
    },
    GuideDocument {
        kind: DocumentKind::Artisan,
        title: "Dhokra Art",
        content: "Dhokra is a non-ferrous metal casting art using the lost-wax casting technique, which is one of the earliest known methods of metal casting. The artisans create intricate figurines of deities, animals, and ritual objects. It is a labor-intensive process, making each piece unique.",
        keywords: &["dhokra", "dokra", "metal", "craft", "artisan", "souvenir", "figurine"],
    },
    GuideDocument {
        kind: DocumentKind::Artisan,
        title: "Wooden Crafts and Toys",
        content: "Jharkhand has a rich tradition of wood carving. Artisans craft beautiful toys, decorative items, and household objects from local woods like Gamhar and Sal. The wooden toys are often painted in vibrant colors and are eco-friendly souvenirs.",
        keywords: &["wood", "carving", "wooden", "toys", "handicraft", "souvenir"],
    },
    GuideDocument {
        kind: DocumentKind::Site,
        title: "Baidyanath Jyotirlinga Temple, Deoghar",
        content: "One of the twelve Jyotirlingas, the Baidyanath temple in Deoghar is a major Hindu pilgrimage site. The temple complex has 22 temples and attracts millions of devotees, especially during the Shravani Mela.",
        keywords: &["temple", "deoghar", "baidyanath", "jyotirlinga", "pilgrimage"],
    },
];

/// Keyword lookup over the built-in guide, used to ground prompts before they
/// reach a backend.
pub struct GuideIndex {}

impl GuideIndex {
    /// Returns a context block for every document sharing at least one token
    /// with the query, or None when nothing matches.
    pub fn retrieve(query: &str) -> Option<String> {
        let lowered = query.to_lowercase();
        let query_words = lowered.split_whitespace().collect::<Vec<&str>>();

        let matched = GUIDE_DOCUMENTS
            .iter()
            .filter(|doc| {
                return doc
                    .keywords
                    .iter()
                    .any(|keyword| return query_words.contains(keyword));
            })
            .collect::<Vec<&GuideDocument>>();

        if matched.is_empty() {
            return None;
        }

        let mut context = String::from("Relevant Information: ");
        for doc in matched {
            context += &format!("\n- {}: {}", doc.title, doc.content);
        }

        return Some(context);
    }
}
