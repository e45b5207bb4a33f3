use crate::catalog::ProductCatalog;
use crate::domain::product::Product;

/// Deterministic demo catalog used when no catalog file is configured.
struct ProductSeed {
    id: u64,
    name: &'static str,
    category: &'static str,
    preferences: &'static [&'static str],
    features: &'static [&'static str],
}

const DEMO_PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: 1,
        name: "RD Station CRM",
        category: "Vendas",
        preferences: &[
            "Integração fácil com ferramentas de e-mail",
            "Personalização de funis de vendas",
            "Relatórios avançados de desempenho de vendas",
        ],
        features: &[
            "Gestão de leads e oportunidades",
            "Automação de fluxos de trabalho de vendas",
            "Rastreamento de interações com clientes",
        ],
    },
    ProductSeed {
        id: 2,
        name: "RD Station Marketing",
        category: "Marketing",
        preferences: &[
            "Automação de marketing",
            "Testes A/B para otimização de campanhas",
            "Segmentação avançada de leads",
        ],
        features: &[
            "Criação e gestão de campanhas de e-mail",
            "Rastreamento de comportamento do usuário",
            "Análise de retorno sobre investimento (ROI) de campanhas",
        ],
    },
    ProductSeed {
        id: 3,
        name: "RD Conversas",
        category: "Omnichannel",
        preferences: &[
            "Integração com chatbots",
            "Histórico unificado de interações",
            "Respostas automáticas e personalizadas",
        ],
        features: &[
            "Gestão de conversas em diferentes canais",
            "Chat ao vivo e mensagens automatizadas",
            "Integração com RD Station CRM e Marketing",
        ],
    },
    ProductSeed {
        id: 4,
        name: "RD Mentor AI",
        category: "Uso de Inteligência Artificial",
        preferences: &[
            "Análise preditiva de dados",
            "Recomendações personalizadas para usuários",
            "Integração com assistentes virtuais",
        ],
        features: &[
            "Análise de sentimentos em textos",
            "Reconhecimento de padrões em dados",
            "Autoatendimento inteligente",
        ],
    },
];

pub fn demo_catalog() -> ProductCatalog {
    DEMO_PRODUCTS
        .iter()
        .map(|seed| {
            Product::new(seed.id, seed.name, seed.category)
                .with_preferences(seed.preferences.iter().copied())
                .with_features(seed.features.iter().copied())
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::demo_catalog;

    #[test]
    fn demo_catalog_is_stable_and_ordered() {
        let catalog = demo_catalog();
        let names: Vec<&str> =
            catalog.products().iter().map(|product| product.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["RD Station CRM", "RD Station Marketing", "RD Conversas", "RD Mentor AI"]
        );
        assert_eq!(catalog, demo_catalog());
        assert!(catalog.products().iter().all(|product| product.preferences.len() == 3));
    }
}
