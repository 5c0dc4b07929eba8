//! Fixed catalog content.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only data source the site has. Pages read these slices
//! directly; nothing is fetched, cached, or written back.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use time::macros::date;

use crate::models::{Destination, Feature, Hotel, Restaurant, Story, StoryCategory};

/// Amenity labels shown on a hotel card.
pub const HOTEL_CARD_AMENITIES: usize = 4;

/// Specialty labels shown on a restaurant card.
pub const RESTAURANT_CARD_SPECIALTIES: usize = 3;

pub const HOTELS: &[Hotel] = &[
    Hotel {
        id: 1,
        name: "Maasai Mara Safari Lodge",
        location: "Maasai Mara National Reserve",
        image: "https://images.pexels.com/photos/258154/pexels-photo-258154.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.8,
        price: 250,
        description: "Experience the ultimate safari adventure with luxury tented accommodation overlooking the Mara River.",
        amenities: &["Game Drives", "Spa", "Restaurant", "WiFi"],
        featured: true,
    },
    Hotel {
        id: 2,
        name: "Serena Beach Resort",
        location: "Mombasa Coast",
        image: "https://images.pexels.com/photos/1450353/pexels-photo-1450353.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.6,
        price: 180,
        description: "Stunning beachfront resort with traditional Swahili architecture and world-class amenities.",
        amenities: &["Beach Access", "Pool", "Spa", "WiFi", "Restaurant"],
        featured: true,
    },
    Hotel {
        id: 3,
        name: "Nairobi Hilton Hotel",
        location: "Nairobi City Center",
        image: "https://images.pexels.com/photos/261102/pexels-photo-261102.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.4,
        price: 120,
        description: "Modern business hotel in the heart of Nairobi with panoramic city views.",
        amenities: &["Business Center", "Gym", "Restaurant", "WiFi", "Parking"],
        featured: false,
    },
    Hotel {
        id: 4,
        name: "Diani Reef Beach Resort",
        location: "Diani Beach",
        image: "https://images.pexels.com/photos/1287460/pexels-photo-1287460.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.7,
        price: 200,
        description: "Tropical paradise with pristine white sand beaches and crystal-clear waters.",
        amenities: &["Beach Access", "Water Sports", "Pool", "Restaurant", "WiFi"],
        featured: true,
    },
    Hotel {
        id: 5,
        name: "Samburu Sopa Lodge",
        location: "Samburu National Reserve",
        image: "https://images.pexels.com/photos/2113566/pexels-photo-2113566.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.5,
        price: 190,
        description: "Authentic African safari experience in the heart of Samburu with traditional architecture.",
        amenities: &["Game Drives", "Cultural Tours", "Restaurant", "Pool"],
        featured: false,
    },
    Hotel {
        id: 6,
        name: "Karen Blixen Coffee Garden",
        location: "Karen, Nairobi",
        image: "https://images.pexels.com/photos/338504/pexels-photo-338504.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.3,
        price: 85,
        description: "Charming boutique hotel set in beautiful gardens with colonial-era charm.",
        amenities: &["Garden Views", "Coffee Shop", "WiFi", "Parking"],
        featured: false,
    },
];

pub const RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        id: 1,
        name: "Carnivore Restaurant",
        location: "Langata, Nairobi",
        image: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.7,
        price_range: "$$$",
        cuisine: "Kenyan BBQ",
        description: "World-famous restaurant serving exotic game meat and traditional Kenyan dishes in a unique safari setting.",
        specialties: &["Nyama Choma", "Game Meat", "Traditional Sides"],
        open_hours: "12:00 PM - 11:00 PM",
        featured: true,
    },
    Restaurant {
        id: 2,
        name: "Tamarind Dhow",
        location: "Mombasa Creek",
        image: "https://images.pexels.com/photos/1126728/pexels-photo-1126728.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.8,
        price_range: "$$$$",
        cuisine: "Seafood",
        description: "Luxury floating restaurant offering fresh seafood while cruising the historic Mombasa Creek.",
        specialties: &["Fresh Lobster", "Swahili Curry", "Seafood Platter"],
        open_hours: "7:00 PM - 10:30 PM",
        featured: true,
    },
    Restaurant {
        id: 3,
        name: "Mama Oliech Restaurant",
        location: "South B, Nairobi",
        image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.5,
        price_range: "$$",
        cuisine: "Traditional Kenyan",
        description: "Authentic Kenyan cuisine in a traditional setting, famous for fresh fish and ugali.",
        specialties: &["Fish Stew", "Ugali", "Sukuma Wiki"],
        open_hours: "11:00 AM - 10:00 PM",
        featured: false,
    },
    Restaurant {
        id: 4,
        name: "Talisman Restaurant",
        location: "Karen, Nairobi",
        image: "https://images.pexels.com/photos/1199957/pexels-photo-1199957.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.6,
        price_range: "$$$",
        cuisine: "International",
        description: "Elegant dining in beautiful gardens, offering contemporary cuisine with an African twist.",
        specialties: &["Fusion Cuisine", "Garden Setting", "Wine Selection"],
        open_hours: "12:00 PM - 11:00 PM",
        featured: true,
    },
    Restaurant {
        id: 5,
        name: "Ali Barbours Cave Restaurant",
        location: "Diani Beach",
        image: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.9,
        price_range: "$$$$",
        cuisine: "Seafood",
        description: "Unique dining experience in a natural coral cave, 10 meters below ground level.",
        specialties: &["Cave Dining", "Fresh Seafood", "Romantic Setting"],
        open_hours: "7:00 PM - 11:00 PM",
        featured: true,
    },
    Restaurant {
        id: 6,
        name: "Java House",
        location: "Multiple Locations",
        image: "https://images.pexels.com/photos/302899/pexels-photo-302899.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4.2,
        price_range: "$$",
        cuisine: "Cafe & International",
        description: "Popular coffee chain offering excellent coffee, fresh pastries, and international dishes.",
        specialties: &["Specialty Coffee", "Fresh Pastries", "Casual Dining"],
        open_hours: "6:00 AM - 10:00 PM",
        featured: false,
    },
];

pub const STORIES: &[Story] = &[
    Story {
        id: 1,
        title: "An Unforgettable Safari Experience in Maasai Mara",
        author: "Sarah Johnson",
        location: "Maasai Mara National Reserve",
        date: date!(2024 - 11 - 15),
        image: "https://images.pexels.com/photos/631317/pexels-photo-631317.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 5,
        excerpt: "Witnessing the Great Migration was a dream come true. The luxury tented camp provided the perfect base for our adventure.",
        content: "Our three-day safari in Maasai Mara exceeded every expectation. From the moment we arrived at the luxury tented camp, we were immersed in the wild beauty of Kenya. The early morning game drives revealed the incredible diversity of wildlife - lions lazing in the shade, elephants crossing the Mara River, and the breathtaking sight of thousands of wildebeest during the Great Migration. The Maasai guides shared their deep knowledge of the land and animals, making every moment educational and magical. The evening sundowners with views over the endless savanna created memories that will last a lifetime.",
        category: StoryCategory::Safari,
    },
    Story {
        id: 2,
        title: "Paradise Found at Diani Beach Resort",
        author: "Marcus Williams",
        location: "Diani Beach",
        date: date!(2024 - 10 - 28),
        image: "https://images.pexels.com/photos/1680172/pexels-photo-1680172.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 5,
        excerpt: "Crystal clear waters, white sand beaches, and incredible hospitality made our honeymoon absolutely perfect.",
        content: "Diani Beach was the perfect choice for our honeymoon. The resort staff went above and beyond to make our stay special, from the flower petals on our bed to the private beach dinner under the stars. We spent our days snorkeling in the crystal-clear Indian Ocean, where we encountered colorful fish and coral reefs. The dhow sailing trip at sunset was magical - the traditional boat glided silently over the calm waters while the sky turned brilliant shades of orange and pink. The Swahili cuisine at the beachside restaurant was exceptional, with fresh seafood caught daily by local fishermen.",
        category: StoryCategory::Beach,
    },
    Story {
        id: 3,
        title: "Cultural Immersion in Nairobi: A City of Contrasts",
        author: "Amara Ochieng",
        location: "Nairobi",
        date: date!(2024 - 12 - 02),
        image: "https://images.pexels.com/photos/5644988/pexels-photo-5644988.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4,
        excerpt: "From bustling markets to world-class museums, Nairobi offers a fascinating blend of traditional and modern Kenya.",
        content: "Nairobi surprised me with its vibrant energy and cultural richness. The National Museum provided incredible insights into Kenya's history and diverse communities. Walking through the Maasai Market, I was amazed by the skilled craftsmanship of local artisans - from beautiful beadwork to intricate wood carvings. The contrast between the modern city center and traditional neighborhoods like Kibera was eye-opening. Dining at Carnivore restaurant was an adventure in itself, trying various game meats in a lively atmosphere. The David Sheldrick Wildlife Orphanage was deeply moving, seeing baby elephants being cared for before their return to the wild.",
        category: StoryCategory::Culture,
    },
    Story {
        id: 4,
        title: "A Culinary Journey Through Coastal Kenya",
        author: "Chef Isabella Rodriguez",
        location: "Mombasa & Coast",
        date: date!(2024 - 11 - 20),
        image: "https://images.pexels.com/photos/1126728/pexels-photo-1126728.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 5,
        excerpt: "The fusion of Arabic, Indian, and African flavors in coastal Kenyan cuisine creates an unforgettable gastronomic experience.",
        content: "As a professional chef, I was blown away by the complexity and richness of coastal Kenyan cuisine. The influence of centuries of trade with Arabia and India has created a unique culinary identity. At Tamarind Dhow, dining while floating on the Indian Ocean was surreal - the fresh lobster curry was perfection. In Old Town Mombasa, I learned to cook pilau rice from a local grandmother, understanding how each spice tells a story of cultural exchange. The coconut-based curries, fresh seafood, and tropical fruits created flavor combinations I had never experienced. Each meal was a celebration of heritage and hospitality.",
        category: StoryCategory::Food,
    },
    Story {
        id: 5,
        title: "Solo Adventure in Samburu: Finding Peace in the Wild",
        author: "David Chen",
        location: "Samburu National Reserve",
        date: date!(2024 - 10 - 15),
        image: "https://images.pexels.com/photos/2113566/pexels-photo-2113566.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 4,
        excerpt: "Traveling solo to Samburu taught me about resilience, both of the wildlife and within myself.",
        content: "My solo journey to Samburu was transformative. The rugged landscape of the reserve, with its red earth and acacia trees, felt like stepping into another world. The unique wildlife here - reticulated giraffes, Grevy's zebras, and Somali ostriches - were unlike anything I had seen in other parks. The Samburu people's deep connection to their land was inspiring. Spending evenings by the campfire, listening to the sounds of the African night, gave me time for reflection and inner peace. The lodge staff became like family, sharing stories and ensuring I never felt alone. This trip reminded me that sometimes the best adventures happen when you step outside your comfort zone.",
        category: StoryCategory::Safari,
    },
    Story {
        id: 6,
        title: "Family Fun at the Kenyan Coast",
        author: "The Johnson Family",
        location: "Malindi",
        date: date!(2024 - 12 - 10),
        image: "https://images.pexels.com/photos/1287460/pexels-photo-1287460.jpeg?auto=compress&cs=tinysrgb&w=800",
        rating: 5,
        excerpt: "Our family vacation in Malindi created memories that our kids will treasure forever.",
        content: "Malindi proved to be the perfect destination for our family vacation. The kids were thrilled by the marine park, where we saw dolphins playing in the waves and colorful fish during our snorkeling adventure. The resort's kids club kept them entertained while my husband and I enjoyed some relaxation time. The highlight was visiting the Gede Ruins, where our children became junior archaeologists exploring the ancient Swahili settlement. The local community was incredibly welcoming - our kids learned basic Swahili words and played football with local children on the beach. The cultural exchange was beautiful to witness, and the natural beauty of the coast provided the perfect backdrop for family bonding.",
        category: StoryCategory::Beach,
    },
];

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        name: "Nairobi",
        image: "https://images.pexels.com/photos/5644988/pexels-photo-5644988.jpeg?auto=compress&cs=tinysrgb&w=800",
        hotels: 145,
        restaurants: 230,
    },
    Destination {
        name: "Mombasa",
        image: "https://images.pexels.com/photos/3881104/pexels-photo-3881104.jpeg?auto=compress&cs=tinysrgb&w=800",
        hotels: 89,
        restaurants: 156,
    },
    Destination {
        name: "Maasai Mara",
        image: "https://images.pexels.com/photos/247431/pexels-photo-247431.jpeg?auto=compress&cs=tinysrgb&w=800",
        hotels: 34,
        restaurants: 45,
    },
    Destination {
        name: "Diani Beach",
        image: "https://images.pexels.com/photos/1619807/pexels-photo-1619807.jpeg?auto=compress&cs=tinysrgb&w=800",
        hotels: 67,
        restaurants: 89,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🏨",
        title: "Premium Hotels",
        description: "From luxury lodges in Maasai Mara to beachfront resorts in Malindi",
    },
    Feature {
        icon: "🍴",
        title: "Authentic Restaurants",
        description: "Experience the best of Kenyan cuisine and international flavors",
    },
    Feature {
        icon: "⭐",
        title: "Verified Reviews",
        description: "Real reviews from travelers who have experienced Kenya",
    },
    Feature {
        icon: "👥",
        title: "Local Expertise",
        description: "Curated by locals who know the hidden gems of Kenya",
    },
];

/// Hero background for the home page.
pub const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/631954/pexels-photo-631954.jpeg?auto=compress&cs=tinysrgb&w=1600";

/// First `n` labels of a record's label list, in order.
#[must_use]
pub fn card_labels(labels: &'static [&'static str], n: usize) -> &'static [&'static str] {
    &labels[..labels.len().min(n)]
}
