use std::borrow::Cow;

/// One card of the homepage features section.
///
/// `id` is the item's stable identity: views are keyed by it, never by the
/// item's position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    pub id: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl FeatureItem {
    /// Builds an item whose id is the slug of `title`.
    pub fn new(title: impl Into<Cow<'static, str>>, description: impl Into<Cow<'static, str>>) -> Self {
        let title = title.into();
        Self {
            id: Cow::Owned(slugify(&title)),
            title,
            description: description.into(),
        }
    }

    const fn borrowed(id: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }
}

/// Lowercases `input`, keeps runs of alphanumerics and collapses everything
/// else into a single `-`. Leading and trailing separators are dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Cards shown on the homepage, in display order.
pub const FEATURE_LIST: &[FeatureItem] = &[
    FeatureItem::borrowed(
        "monitoramento-inteligente-de-medicamentos",
        "Monitoramento Inteligente de Medicamentos",
        "O sistema foi projetado para monitorar o uso de medicamentos em tempo real, \
         integrando sensores físicos, atuadores multimodais e conectividade via protocolo MQTT. \
         Ele garante maior adesão ao tratamento e permite o acompanhamento remoto do uso de \
         medicamentos por pacientes e cuidadores.",
    ),
    FeatureItem::borrowed(
        "integração-iot-e-mqtt",
        "Integração IoT e MQTT",
        "Com base no microcontrolador ESP32, o projeto utiliza o protocolo MQTT para \
         comunicação com a internet. Mensagens são publicadas e recebidas em tempo real, \
         permitindo o envio de alertas, comandos remotos e registro de eventos diretamente \
         em um broker público ou servidor local.",
    ),
    FeatureItem::borrowed(
        "código-aberto-e-simulação",
        "Código Aberto e Simulação",
        "Desenvolvido com hardware de código aberto e testado no simulador online Wokwi, \
         o protótipo pode ser facilmente reproduzido e expandido. Inclui sensores, atuadores \
         e display OLED, todos integrados ao ESP32.",
    ),
];
