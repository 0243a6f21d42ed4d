//! Demo fixtures.
//!
//! Every surface is seeded once at startup from these tables; nothing here
//! is fetched or persisted. The `expect`s are startup-only and guard
//! fixture typos (duplicate ids, malformed dates).

use chrono::{Duration, NaiveDate, Utc};

use sublynx_core::catalog::Catalog;
use sublynx_core::engagement::Engagement;
use sublynx_core::events::{AudioPreview, FeedEvent, MapEvent, Organizer, Venue};
use sublynx_core::gamification::{
    Challenge, ChallengeBoard, ChallengeCategory, ChallengeKind, Leaderboard, LeaderboardEntry,
    Rarity, Reward, RewardKind,
};
use sublynx_core::invites::{EventDossier, InviteQueue, InviteRequest, InviteStatus};
use sublynx_core::marketplace::{Category, Condition, Listing, Seller};
use sublynx_core::profile::{Achievement, EventPhoto};

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("seed date must be YYYY-MM-DD")
}

pub fn marketplace() -> Catalog<Listing> {
    let listings = vec![
        Listing {
            id: "1".to_string(),
            name: "Jaqueta Cyberpunk LED Premium".to_string(),
            description: "Jaqueta preta com LEDs programáveis RGB, controle via app, \
                          bateria 12h. Material resistente à água."
                .to_string(),
            price: 350,
            category: Category::Clothes,
            condition: Condition::New,
            images: vec!["/marketplace-jacket.png".to_string()],
            seller: Seller {
                name: "CyberFashion".to_string(),
                avatar: "/seller-cyber.png".to_string(),
                rating: 4.8,
                verified: true,
                location: "São Paulo, SP".to_string(),
                response_time: Some("< 1h".to_string()),
                total_sales: Some(127),
            },
            views: 1247,
            likes: Engagement::new(89, false),
            watchers: 23,
            tradeable: true,
            posted_at: date("2024-01-15"),
            tags: vec![
                "LED".to_string(),
                "Cyberpunk".to_string(),
                "Rave".to_string(),
                "Premium".to_string(),
                "RGB".to_string(),
            ],
            featured: true,
            discount_pct: Some(15),
        },
        Listing {
            id: "2".to_string(),
            name: "Óculos Holográficos Limitados".to_string(),
            description: "Óculos com lentes holográficas que mudam de cor. \
                          Edição limitada numerada (47/100)."
                .to_string(),
            price: 180,
            category: Category::Accessories,
            condition: Condition::New,
            images: vec!["/marketplace-glasses.png".to_string()],
            seller: Seller {
                name: "NeonAccessories".to_string(),
                avatar: "/seller-neon.png".to_string(),
                rating: 4.9,
                verified: true,
                location: "Rio de Janeiro, RJ".to_string(),
                response_time: Some("< 30min".to_string()),
                total_sales: Some(89),
            },
            views: 892,
            likes: Engagement::new(156, true),
            watchers: 34,
            tradeable: false,
            posted_at: date("2024-01-14"),
            tags: vec![
                "Holográfico".to_string(),
                "Limitado".to_string(),
                "Numerado".to_string(),
                "Exclusivo".to_string(),
            ],
            featured: true,
            discount_pct: None,
        },
        Listing {
            id: "3".to_string(),
            name: "NFT Art - Acid Dreams Collection".to_string(),
            description: "Obra digital exclusiva da série Acid Dreams. \
                          Inclui NFT verificado + print físico A3."
                .to_string(),
            price: 500,
            category: Category::Art,
            condition: Condition::New,
            images: vec!["/marketplace-nft.png".to_string()],
            seller: Seller {
                name: "DigitalArtist".to_string(),
                avatar: "/seller-artist.png".to_string(),
                rating: 4.7,
                verified: true,
                location: "Belo Horizonte, MG".to_string(),
                response_time: Some("< 2h".to_string()),
                total_sales: Some(45),
            },
            views: 1567,
            likes: Engagement::new(234, false),
            watchers: 67,
            tradeable: true,
            posted_at: date("2024-01-13"),
            tags: vec![
                "NFT".to_string(),
                "Digital".to_string(),
                "Acid House".to_string(),
                "Print Incluído".to_string(),
            ],
            featured: false,
            discount_pct: None,
        },
        Listing {
            id: "4".to_string(),
            name: "Vape Neon Customizado Pro".to_string(),
            description: "Vape personalizado com luzes neon sincronizadas, \
                          5 sabores exclusivos, carregador wireless."
                .to_string(),
            price: 120,
            category: Category::Vapes,
            condition: Condition::New,
            images: vec!["/marketplace-vape.png".to_string()],
            seller: Seller {
                name: "VapeCustom".to_string(),
                avatar: "/seller-vape.png".to_string(),
                rating: 4.6,
                verified: false,
                location: "Curitiba, PR".to_string(),
                response_time: Some("< 4h".to_string()),
                total_sales: Some(23),
            },
            views: 678,
            likes: Engagement::new(45, false),
            watchers: 19,
            tradeable: true,
            posted_at: date("2024-01-12"),
            tags: vec![
                "Customizado".to_string(),
                "Neon".to_string(),
                "Wireless".to_string(),
                "5 Sabores".to_string(),
            ],
            featured: false,
            discount_pct: Some(10),
        },
    ];

    Catalog::new(listings).expect("marketplace seed ids are unique")
}

pub fn feed() -> Catalog<FeedEvent> {
    let events = vec![
        FeedEvent {
            id: "1".to_string(),
            name: "Experiência Techno Noturna".to_string(),
            description: "Prepare-se para uma noite épica de techno com os melhores DJs \
                          da cena brasileira. Som de última geração e vibes incomparáveis."
                .to_string(),
            genre: "Techno".to_string(),
            kind: "Rave".to_string(),
            venue: Venue {
                name: "Zona Industrial - SP".to_string(),
                exact: false,
                distance_km: 2.5,
            },
            time: "23:00".to_string(),
            date_label: "Hoje".to_string(),
            posted_at: date("2024-01-15"),
            organizer: Organizer {
                name: "TechnoCollective".to_string(),
                avatar: "/techno-dj-avatar.png".to_string(),
                verified: true,
            },
            likes: Engagement::new(127, false),
            comments: 23,
            checkins: Engagement::new(89, false),
            audio: AudioPreview {
                title: "Preview Mix - Dark Pulse".to_string(),
                duration: "2:30".to_string(),
            },
            image: "/placeholder-i01y6.png".to_string(),
            tags: vec![
                "Techno".to_string(),
                "Dark".to_string(),
                "Industrial".to_string(),
            ],
        },
        FeedEvent {
            id: "2".to_string(),
            name: "Sessão Bass Exclusiva".to_string(),
            description: "Sessão exclusiva de drum & bass em local revelado apenas para \
                          membros VIP. Lineup surpresa com artistas internacionais."
                .to_string(),
            genre: "Drum & Bass".to_string(),
            kind: "Secret".to_string(),
            venue: Venue {
                name: "Local Secreto".to_string(),
                exact: false,
                distance_km: 5.2,
            },
            time: "22:30".to_string(),
            date_label: "Amanhã".to_string(),
            posted_at: date("2024-01-14"),
            organizer: Organizer {
                name: "BassHeads".to_string(),
                avatar: "/bass-dj-avatar.png".to_string(),
                verified: true,
            },
            likes: Engagement::new(89, true),
            comments: 15,
            checkins: Engagement::new(45, false),
            audio: AudioPreview {
                title: "Exclusive Preview".to_string(),
                duration: "1:45".to_string(),
            },
            image: "/exclusive-drum-bass.png".to_string(),
            tags: vec![
                "Secret".to_string(),
                "VIP Only".to_string(),
                "International".to_string(),
            ],
        },
        FeedEvent {
            id: "3".to_string(),
            name: "Cyber Pulse Festival".to_string(),
            description: "Festival de psytrance com 3 palcos, arte digital interativa e \
                          experiências imersivas. Uma jornada psicodélica única."
                .to_string(),
            genre: "Psytrance".to_string(),
            kind: "Festival".to_string(),
            venue: Venue {
                name: "Complexo Cultural - Zona Sul".to_string(),
                exact: true,
                distance_km: 8.1,
            },
            time: "20:00".to_string(),
            date_label: "Sábado".to_string(),
            posted_at: date("2024-01-13"),
            organizer: Organizer {
                name: "PsyCollective".to_string(),
                avatar: "/psytrance-organizer-avatar.png".to_string(),
                verified: true,
            },
            likes: Engagement::new(234, true),
            comments: 67,
            checkins: Engagement::new(156, true),
            audio: AudioPreview {
                title: "Festival Anthem 2024".to_string(),
                duration: "3:15".to_string(),
            },
            image: "/colorful-psytrance-art.png".to_string(),
            tags: vec![
                "Festival".to_string(),
                "3 Stages".to_string(),
                "Digital Art".to_string(),
            ],
        },
    ];

    Catalog::new(events).expect("feed seed ids are unique")
}

pub fn map_events() -> Catalog<MapEvent> {
    let events = vec![
        MapEvent {
            id: "1".to_string(),
            name: "Experiência Techno Noturna".to_string(),
            genre: "Techno".to_string(),
            kind: "Rave".to_string(),
            x: 25.0,
            y: 30.0,
            attendees: 150,
            secret: false,
            distance_km: 2.5,
            time: "23:00".to_string(),
            description: "Experiência techno imersiva".to_string(),
        },
        MapEvent {
            id: "2".to_string(),
            name: "Sessão Bass Exclusiva".to_string(),
            genre: "Drum & Bass".to_string(),
            kind: "Club".to_string(),
            x: 60.0,
            y: 45.0,
            attendees: 80,
            secret: true,
            distance_km: 5.2,
            time: "22:30".to_string(),
            description: "Sessão exclusiva de bass".to_string(),
        },
        MapEvent {
            id: "3".to_string(),
            name: "Cyber Pulse".to_string(),
            genre: "Psytrance".to_string(),
            kind: "Festival".to_string(),
            x: 40.0,
            y: 70.0,
            attendees: 300,
            secret: false,
            distance_km: 8.1,
            time: "20:00".to_string(),
            description: "Psychedelic journey".to_string(),
        },
        MapEvent {
            id: "4".to_string(),
            name: "Dark Matter".to_string(),
            genre: "Dark Techno".to_string(),
            kind: "Warehouse".to_string(),
            x: 75.0,
            y: 25.0,
            attendees: 120,
            secret: true,
            distance_km: 3.7,
            time: "01:00".to_string(),
            description: "Industrial warehouse party".to_string(),
        },
        MapEvent {
            id: "5".to_string(),
            name: "Acid Dreams".to_string(),
            genre: "Acid House".to_string(),
            kind: "Loft".to_string(),
            x: 15.0,
            y: 60.0,
            attendees: 60,
            secret: true,
            distance_km: 1.8,
            time: "21:00".to_string(),
            description: "Intimate acid house session".to_string(),
        },
    ];

    Catalog::new(events).expect("map seed ids are unique")
}

pub fn challenges() -> ChallengeBoard {
    let expires_daily = Utc::now() + Duration::days(1);
    let expires_weekly = Utc::now() + Duration::days(6);

    ChallengeBoard::new(vec![
        Challenge {
            id: "1".to_string(),
            title: "Party Explorer".to_string(),
            description: "Faça check-in em 3 eventos diferentes".to_string(),
            points: 150,
            progress: 2,
            max_progress: 3,
            kind: ChallengeKind::Daily,
            category: ChallengeCategory::Events,
            completed: false,
            expires_at: expires_daily,
        },
        Challenge {
            id: "2".to_string(),
            title: "Social Butterfly".to_string(),
            description: "Curta 10 posts no feed".to_string(),
            points: 50,
            progress: 7,
            max_progress: 10,
            kind: ChallengeKind::Daily,
            category: ChallengeCategory::Social,
            completed: false,
            expires_at: expires_daily,
        },
        Challenge {
            id: "3".to_string(),
            title: "Secret Hunter".to_string(),
            description: "Descubra 2 eventos secretos".to_string(),
            points: 300,
            progress: 1,
            max_progress: 2,
            kind: ChallengeKind::Weekly,
            category: ChallengeCategory::Exploration,
            completed: false,
            expires_at: expires_weekly,
        },
        Challenge {
            id: "4".to_string(),
            title: "Marketplace Master".to_string(),
            description: "Compre ou troque 1 item no marketplace".to_string(),
            points: 200,
            progress: 0,
            max_progress: 1,
            kind: ChallengeKind::Weekly,
            category: ChallengeCategory::Marketplace,
            completed: false,
            expires_at: expires_weekly,
        },
    ])
}

pub fn leaderboard() -> Leaderboard {
    Leaderboard::new(vec![
        LeaderboardEntry {
            id: "1".to_string(),
            name: "CyberRaver".to_string(),
            avatar: "/leaderboard-1.png".to_string(),
            level: 8,
            points: 4250,
            rank: 1,
            weekly_points: 850,
            badges: vec!["🏆".to_string(), "🎵".to_string(), "🔥".to_string()],
        },
        LeaderboardEntry {
            id: "2".to_string(),
            name: "NeonDancer".to_string(),
            avatar: "/leaderboard-2.png".to_string(),
            level: 7,
            points: 3890,
            rank: 2,
            weekly_points: 720,
            badges: vec!["⭐".to_string(), "🎭".to_string(), "💫".to_string()],
        },
        LeaderboardEntry {
            id: "3".to_string(),
            name: "BassHunter".to_string(),
            avatar: "/leaderboard-3.png".to_string(),
            level: 6,
            points: 3456,
            rank: 3,
            weekly_points: 650,
            badges: vec!["🎧".to_string(), "🌟".to_string(), "🚀".to_string()],
        },
        LeaderboardEntry {
            id: "4".to_string(),
            name: "Alex".to_string(),
            avatar: "/user-avatar.png".to_string(),
            level: 3,
            points: 1250,
            rank: 47,
            weekly_points: 180,
            badges: vec!["🎉".to_string(), "🎶".to_string()],
        },
    ])
}

pub fn rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "1".to_string(),
            name: "Avatar Holográfico".to_string(),
            description: "Avatar exclusivo com efeitos holográficos".to_string(),
            cost: 500,
            kind: RewardKind::Avatar,
            rarity: Rarity::Epic,
            image: "/reward-avatar-holo.png".to_string(),
            available: true,
        },
        Reward {
            id: "2".to_string(),
            name: "Badge Lenda SUBLINX".to_string(),
            description: "Badge exclusiva para verdadeiros veteranos da plataforma".to_string(),
            cost: 1000,
            kind: RewardKind::Badge,
            rarity: Rarity::Legendary,
            image: "/reward-badge-legend.png".to_string(),
            available: false,
        },
        Reward {
            id: "3".to_string(),
            name: "Desconto 20% Marketplace".to_string(),
            description: "20% de desconto em qualquer item do marketplace".to_string(),
            cost: 200,
            kind: RewardKind::Discount,
            rarity: Rarity::Common,
            image: "/reward-discount.png".to_string(),
            available: true,
        },
        Reward {
            id: "4".to_string(),
            name: "Acesso VIP Eventos".to_string(),
            description: "Acesso antecipado a eventos exclusivos por 1 mês".to_string(),
            cost: 800,
            kind: RewardKind::Exclusive,
            rarity: Rarity::Rare,
            image: "/reward-vip.png".to_string(),
            available: true,
        },
    ]
}

pub fn invites() -> InviteQueue {
    InviteQueue::new(vec![
        InviteRequest {
            id: "1".to_string(),
            event_id: "2".to_string(),
            event_name: "Sessão Bass Exclusiva".to_string(),
            requester_name: "Alex Silva".to_string(),
            message: "Sou fã de drum & bass há anos e adoraria participar desta \
                      sessão exclusiva!"
                .to_string(),
            status: InviteStatus::Pending,
            submitted_at: Utc::now() - Duration::hours(2),
        },
        InviteRequest {
            id: "2".to_string(),
            event_id: "4".to_string(),
            event_name: "Dark Matter".to_string(),
            requester_name: "Maria Santos".to_string(),
            message: "Tenho experiência em eventos underground e respeito as regras \
                      da comunidade."
                .to_string(),
            status: InviteStatus::Approved,
            submitted_at: Utc::now() - Duration::days(1),
        },
    ])
}

pub fn dossier() -> EventDossier {
    EventDossier {
        id: "2".to_string(),
        name: "Sessão Bass Exclusiva".to_string(),
        description: "Sessão exclusiva de drum & bass em local revelado apenas para \
                      membros VIP."
            .to_string(),
        full_description: "Uma experiência única de drum & bass com lineup internacional \
                           secreto. O evento acontece em um warehouse reformado com sistema \
                           de som de última geração. Apenas 80 pessoas selecionadas terão \
                           acesso a esta noite épica."
            .to_string(),
        image: "/exclusive-drum-bass.png".to_string(),
        address: "Warehouse 47 - Rua Industrial, 234 - Vila Madalena".to_string(),
        coordinates: "-23.5505, -46.6333".to_string(),
        price: 85,
        available_tickets: 12,
        lineup: vec![
            "DJ Shadow Bass".to_string(),
            "MC Velocity".to_string(),
            "Producer X".to_string(),
            "Local Hero".to_string(),
        ],
        amenities: vec![
            "Bar Premium".to_string(),
            "Área VIP".to_string(),
            "Coat Check".to_string(),
            "Segurança 24h".to_string(),
        ],
        rules: vec![
            "Proibido fotos/vídeos".to_string(),
            "Dress code: Dark/Industrial".to_string(),
            "Idade mínima: 21 anos".to_string(),
        ],
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            name: "Party Pioneer".to_string(),
            description: "Participou do seu primeiro evento exclusivo".to_string(),
            icon: "🎉".to_string(),
            unlocked_at: date("2024-01-01"),
            rarity: Rarity::Common,
        },
        Achievement {
            id: "2".to_string(),
            name: "Bass Master".to_string(),
            description: "Participou de 5 eventos de drum & bass".to_string(),
            icon: "🔊".to_string(),
            unlocked_at: date("2024-01-10"),
            rarity: Rarity::Rare,
        },
        Achievement {
            id: "3".to_string(),
            name: "Secret Agent".to_string(),
            description: "Descobriu 3 eventos secretos".to_string(),
            icon: "🕵️".to_string(),
            unlocked_at: date("2024-01-15"),
            rarity: Rarity::Epic,
        },
    ]
}

pub fn photos() -> Vec<EventPhoto> {
    vec![
        EventPhoto {
            id: "1".to_string(),
            event_name: "Neon Nights".to_string(),
            date: date("2024-01-15"),
            image_url: "/event-photo1.png".to_string(),
            likes: 23,
        },
        EventPhoto {
            id: "2".to_string(),
            event_name: "Sessão Bass Exclusiva".to_string(),
            date: date("2024-01-10"),
            image_url: "/event-photo2.png".to_string(),
            likes: 45,
        },
        EventPhoto {
            id: "3".to_string(),
            event_name: "Cyber Pulse".to_string(),
            date: date("2024-01-05"),
            image_url: "/event-photo3.png".to_string(),
            likes: 67,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_build_without_duplicate_ids() {
        assert_eq!(marketplace().len(), 4);
        assert_eq!(feed().len(), 3);
        assert_eq!(map_events().len(), 5);
        assert_eq!(challenges().iter().count(), 4);
        assert_eq!(rewards().len(), 4);
        assert_eq!(invites().iter().count(), 2);
    }

    #[test]
    fn map_seeds_three_secret_events() {
        let secret = map_events().iter().filter(|e| e.secret).count();
        assert_eq!(secret, 3);
    }
}
